use std::sync::Arc;

use ecoscan_core::application::EcoscanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<EcoscanService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: EcoscanService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
