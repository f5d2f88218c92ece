use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::*;
use dioxus::html::HasFileData;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::config::Config;
use crate::domain::entities::plan_row::PlanRow;
use crate::domain::error::PlanError;
use crate::infra::import::xlsx::read_workbook_bytes;
use crate::platform::desktop::blocking::run_blocking;
use crate::platform::desktop::save_dialog::SaveDialogSink;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::session_service::{PlanSession, SessionCommand, SessionEvent};

const WORKBOOK_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];
const EMPTY_TALLY_HINT: &str = "Sélectionnez des lignes pour voir le comptage des références";

pub fn status_message(events: &[SessionEvent]) -> Option<String> {
    let mut message = None;
    for event in events {
        match event {
            SessionEvent::ParseFailed(err) => return Some(parse_error_message(err)),
            SessionEvent::RowsLoaded { count } => {
                return Some(format!("{count} lignes chargées depuis la feuille Plan"));
            }
            SessionEvent::TallyUpdated { keys, total } => {
                message = Some(format!(
                    "{total} ligne(s) sélectionnée(s), {keys} référence(s)"
                ));
            }
            SessionEvent::RowToggled { .. }
            | SessionEvent::ToggleIgnored { .. }
            | SessionEvent::ExportReady(_) => {}
        }
    }
    message
}

pub fn parse_error_message(err: &PlanError) -> String {
    match err {
        PlanError::SheetNotFound { sheet } => {
            format!("Aucune feuille \"{sheet}\" trouvée dans le fichier Excel")
        }
        PlanError::MalformedFile(detail) => format!("Fichier Excel illisible : {detail}"),
    }
}

pub fn export_status_message(saved: Option<&Path>) -> String {
    match saved {
        Some(path) => format!("Comptages enregistrés dans {}", path.display()),
        None => "Téléchargement annulé".to_string(),
    }
}

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; gap: 16px; padding: 16px; box-sizing: border-box; overflow: hidden; font-family: sans-serif; background: #f5f5f5;"
}

pub fn import_zone_style(busy: bool, drag_active: bool) -> String {
    format!(
        "padding: 24px; text-align: center; border: 2px dashed #1976d2; border-radius: 8px; background: {}; cursor: {};",
        if drag_active || busy { "#e3eefa" } else { "#fff" },
        if busy { "progress" } else { "pointer" }
    )
}

pub fn import_zone_title(drag_active: bool) -> &'static str {
    if drag_active {
        "Déposez votre fichier Excel ici"
    } else {
        "Glissez-déposez votre fichier Excel ici"
    }
}

pub fn is_workbook_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str()))
}

/// Only the first dropped file is imported, and only if it looks like a workbook.
pub fn dropped_workbook(paths: &[PathBuf]) -> Result<&Path, String> {
    let Some(path) = paths.first() else {
        return Err("Aucun fichier déposé".to_string());
    };
    if !is_workbook_path(path) {
        return Err(format!(
            "Format non pris en charge : {} (attendu .xlsx ou .xls)",
            path.display()
        ));
    }
    Ok(path)
}

pub fn import_workbook_file(session: &mut PlanSession, path: &Path) -> Result<Vec<SessionEvent>> {
    let bytes = run_blocking(|| read_workbook_bytes(path))?;
    Ok(session.dispatch(SessionCommand::ParseFile(bytes)))
}

pub fn import_status(result: &Result<Vec<SessionEvent>>) -> Option<String> {
    match result {
        Ok(events) => status_message(events),
        Err(err) => Some(format!("Lecture du fichier impossible : {err}")),
    }
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; background: #fff; border-radius: 8px; padding: 12px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; background: #fafafa; border-bottom: 2px solid #ccc; padding: 8px; text-align: left; font-weight: bold;"
}

pub fn row_style(selected: bool) -> &'static str {
    if selected {
        "background: #eef4ff;"
    } else {
        ""
    }
}

fn notify_parse_error(err: &PlanError) {
    let level = match err {
        PlanError::SheetNotFound { .. } => MessageLevel::Warning,
        PlanError::MalformedFile(_) => MessageLevel::Error,
    };
    MessageDialog::new()
        .set_level(level)
        .set_title("Import impossible")
        .set_description(parse_error_message(err))
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();

    let AppState {
        mut session,
        mut busy,
        mut status,
        mut last_export,
        mut drag_active,
    } = AppState::new();

    let mut run_import = move |file_path: PathBuf| {
        *busy.write() = true;
        *status.write() = format!("Import de {} en cours", file_path.display());

        let result = import_workbook_file(&mut session.write(), &file_path);
        if let Ok(events) = &result {
            if let Some(SessionEvent::ParseFailed(err)) = events.first() {
                notify_parse_error(err);
            }
        }
        if let Err(err) = &result {
            log::warn!("{err:#}");
        }
        if let Some(message) = import_status(&result) {
            *status.write() = message;
        }

        *busy.write() = false;
    };

    let export_service = Arc::new(ExportService::new(
        Arc::new(SaveDialogSink {
            start_dir: config.export_directory(),
        }),
        config.export_file_name(),
    ));

    let rows: Vec<PlanRow> = session.read().rows().to_vec();
    let tally_entries: Vec<(String, usize)> = session
        .read()
        .tally()
        .iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect();
    let tally_is_empty = tally_entries.is_empty();
    let (is_loaded, row_count, selected_count) = {
        let current = session.read();
        let store = current.store();
        (store.is_loaded(), store.len(), store.selected_count())
    };
    let export_file_name = export_service.file_name().to_string();
    let last_export_label = last_export()
        .map(|path| path.display().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            style: "{root_container_style()}",
            div {
                style: "{import_zone_style(busy(), drag_active())}",
                ondragover: move |evt| {
                    evt.prevent_default();
                    if !drag_active() {
                        drag_active.set(true);
                    }
                },
                ondragleave: move |_| drag_active.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    drag_active.set(false);
                    if busy() {
                        return;
                    }

                    let paths: Vec<PathBuf> = evt.files().iter().map(|file| file.path()).collect();
                    match dropped_workbook(&paths) {
                        Ok(file_path) => run_import(file_path.to_path_buf()),
                        Err(message) => *status.write() = message,
                    }
                },
                onclick: move |_| {
                    if busy() {
                        return;
                    }

                    let Some(file_path) = FileDialog::new()
                        .add_filter("Excel", &["xlsx", "xls"])
                        .add_filter("Tous les fichiers", &["*"])
                        .pick_file() else {
                        *status.write() = "Import annulé".to_string();
                        return;
                    };

                    run_import(file_path);
                },
                h2 { style: "margin: 0 0 8px 0;", "{import_zone_title(drag_active())}" }
                p { style: "margin: 0; color: #666;", "ou cliquez pour sélectionner un fichier (.xlsx, .xls)" }
            }

            div {
                style: "display: flex; gap: 16px; flex: 1; min-height: 0;",
                div {
                    style: "{table_container_style()}",
                    div {
                        style: "display: flex; align-items: center; gap: 8px; margin-bottom: 12px;",
                        h3 { style: "margin: 0;", "Données des Supports" }
                        span {
                            title: "Sélectionnez les lignes pour compter leurs références",
                            style: "cursor: help; color: #1976d2;",
                            "ⓘ"
                        }
                        if is_loaded {
                            span { style: "margin-left: auto; color: #666;", "{row_count} ligne(s), {selected_count} sélectionnée(s)" }
                        }
                    }
                    if !is_loaded {
                        p { style: "color: #666;", "Aucun fichier chargé" }
                    }
                    table { style: "border-collapse: collapse; width: 100%;",
                        thead {
                            tr {
                                th { style: "{table_header_cell_style()} width: 60px;", "Sélection" }
                                th { style: "{table_header_cell_style()}", "Support N°" }
                                th { style: "{table_header_cell_style()}", "Type" }
                                th { style: "{table_header_cell_style()}", "Symbole" }
                            }
                        }
                        tbody {
                            {rows.iter().map(|row| {
                                let index = row.index;
                                rsx!(
                                    tr {
                                        key: "{index}",
                                        style: "{row_style(row.selected)}",
                                        td { style: "border-bottom: 1px solid #eee; padding: 8px; text-align: center;",
                                            input {
                                                r#type: "checkbox",
                                                checked: row.selected,
                                                aria_label: "Sélectionner la ligne {index}",
                                                onclick: move |_| {
                                                    let events = session.write().dispatch(SessionCommand::ToggleRow(index));
                                                    if let Some(message) = status_message(&events) {
                                                        *status.write() = message;
                                                    }
                                                }
                                            }
                                        }
                                        td { style: "border-bottom: 1px solid #eee; padding: 8px;", "{row.primary}" }
                                        td { style: "border-bottom: 1px solid #eee; padding: 8px;", "{row.secondary}" }
                                        td { style: "border-bottom: 1px solid #eee; padding: 8px;", "{row.key}" }
                                    }
                                )
                            })}
                        }
                    }
                }

                div {
                    style: "width: 320px; display: flex; flex-direction: column; background: #fff; border-radius: 8px; padding: 12px;",
                    h3 { style: "margin: 0 0 12px 0;", "Comptage des Références" }
                    div {
                        style: "flex: 1; overflow: auto;",
                        if tally_is_empty {
                            p { style: "text-align: center; color: #666; padding: 24px 0;", "{EMPTY_TALLY_HINT}" }
                        } else {
                            for (reference, count) in tally_entries {
                                div {
                                    key: "{reference}",
                                    style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #eee;",
                                    span { "{reference}" }
                                    span { style: "font-weight: bold; color: #1976d2;", "{count}" }
                                }
                            }
                        }
                    }
                    button {
                        style: "margin-top: 12px; padding: 10px; width: 100%;",
                        disabled: tally_is_empty || busy(),
                        title: "{export_file_name}",
                        onclick: move |_| {
                            let events = session.write().dispatch(SessionCommand::Export);
                            let Some(SessionEvent::ExportReady(content)) = events.into_iter().next() else {
                                return;
                            };

                            match export_service.export(&content) {
                                Ok(saved) => {
                                    *status.write() = export_status_message(saved.as_deref());
                                    if saved.is_some() {
                                        *last_export.write() = saved;
                                    }
                                }
                                Err(err) => {
                                    log::error!("{err:#}");
                                    *status.write() = format!("Échec du téléchargement : {err}");
                                }
                            }
                        },
                        "Télécharger les Comptages"
                    }
                }
            }

            footer {
                style: "display: flex; justify-content: space-between; color: #555; font-size: 0.9em;",
                span { "{status}" }
                if !last_export_label.is_empty() {
                    span { "Dernier export : {last_export_label}" }
                }
            }
        }
    }
}
