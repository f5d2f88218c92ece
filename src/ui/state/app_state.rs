use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::infra::import::xlsx::CalamineSource;
use crate::usecase::services::session_service::PlanSession;

pub const READY_STATUS: &str = "Prêt";

pub struct AppState {
    pub session: Signal<PlanSession>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub last_export: Signal<Option<PathBuf>>,
    pub drag_active: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(|| PlanSession::new(Arc::new(CalamineSource))),
            busy: use_signal(|| false),
            status: use_signal(|| READY_STATUS.to_string()),
            last_export: use_signal(|| None::<PathBuf>),
            drag_active: use_signal(|| false),
        }
    }
}
