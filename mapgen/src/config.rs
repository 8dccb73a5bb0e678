use std::path::PathBuf;

pub struct GenCfg {
    pub out_path: PathBuf, // written relative to the working directory
    pub verify_connectivity: bool,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("map.txt"),
            verify_connectivity: true,
        }
    }
}
