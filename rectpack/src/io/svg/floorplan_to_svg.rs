use crate::entities::Floorplan;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Renders a floorplan with the origin in the bottom-left corner.
pub fn floorplan_to_svg(floorplan: &Floorplan, options: SvgDrawOptions, title: &str) -> Document {
    let (bb_width, bb_height) = floorplan.bounding_box;
    // an empty floorplan still gets a drawable canvas
    let (canvas_w, canvas_h) = match bb_width > 0.0 && bb_height > 0.0 {
        true => (bb_width, bb_height),
        false => (1.0, 1.0),
    };
    let min_dim = f64::min(canvas_w, canvas_h);
    let margin = 0.05 * f64::max(canvas_w, canvas_h);
    let font_size = min_dim * 0.04;
    let header_space = match options.header {
        true => 2.0 * font_size,
        false => 0.0,
    };

    let theme = &options.theme;
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    // svg y-axis points down
    let flip_y = |y: f64, height: f64| canvas_h - (y + height);

    let label = {
        let placed_area = floorplan
            .positions
            .iter()
            .map(|p| p.width * p.height)
            .sum::<f64>();
        let density = match floorplan.area > 0.0 {
            true => placed_area / floorplan.area,
            false => 0.0,
        };
        let label_content = format!(
            "width: {:.3} | height: {:.3} | area: {:.3} | density: {:.3}% | {}",
            bb_width,
            bb_height,
            floorplan.area,
            density * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let bbox_group = Group::new()
        .set("id", "bounding_box")
        .add(svg_util::rect(
            0.0,
            0.0,
            canvas_w,
            canvas_h,
            &[
                ("fill", &*format!("{}", theme.background_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "bounding box: [width: {:.3}, height: {:.3}, area: {:.3}]",
            bb_width, bb_height, floorplan.area
        )));

    let rects_group = {
        let mut rects_group = Group::new().set("id", "rectangles");
        for p in floorplan.positions.iter() {
            let (fill, font) = theme.colors(p.id);
            let y = flip_y(p.y, p.height);
            let mut group = Group::new()
                .set("id", format!("rect_{}", p.id))
                .add(svg_util::rect(
                    p.x,
                    y,
                    p.width,
                    p.height,
                    &[
                        ("fill", &*format!("{fill}")),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!(
                    "rectangle, id: {}, x: {:.3}, y: {:.3}, width: {:.3}, height: {:.3}",
                    p.id, p.x, p.y, p.width, p.height
                )));
            if options.id_labels {
                let id_font_size = f64::min(font_size * 1.5, 0.5 * f64::min(p.width, p.height));
                group = group.add(
                    Text::new(format!("{}", p.id))
                        .set("x", p.x + 0.5 * p.width)
                        .set("y", y + 0.5 * p.height)
                        .set("font-size", id_font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central")
                        .set("fill", format!("{font}")),
                );
            }
            rects_group = rects_group.add(group);
        }
        rects_group
    };

    let vbox = (
        -margin,
        -margin - header_space,
        canvas_w + 2.0 * margin,
        canvas_h + 2.0 * margin + header_space,
    );

    let mut document = Document::new()
        .set("viewBox", vbox)
        .add(bbox_group)
        .add(rects_group);
    if options.header {
        document = document.add(label);
    }
    document
}
