use crate::config::SAConfig;
use rectpack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct SAOutput {
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: SAConfig,
}
