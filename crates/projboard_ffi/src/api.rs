//! FFI board API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one process-wide board to the host UI via FRB.
//! - Translate host drag events into the core drag protocol.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Statuses cross the boundary as `active|finished`, ids as UUID strings.

use log::warn;
use projboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_project_id, ping as ping_inner, Board, DataTransfer, DragEvent, DragTarget, Draggable,
    EffectAllowed, ItemView, ListView, ProjectItem, ProjectStatus,
};
use std::sync::OnceLock;

static BOARD: OnceLock<Board> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One project card as the host should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardItemView {
    pub project_id: String,
    pub title: String,
    /// `"N Participant(s)"`.
    pub participants: String,
    pub description: String,
}

/// One status list as the host should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardListView {
    /// `active|finished`.
    pub status: String,
    pub element_id: String,
    pub list_id: String,
    pub heading: String,
    pub droppable: bool,
    pub items: Vec<BoardItemView>,
}

/// Transfer payload produced on drag start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDragPayload {
    /// Payload type; always `text/plain`.
    pub format: String,
    pub data: String,
    pub effect_allowed: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    pub ok: bool,
    /// Affected project ID, when there is one.
    pub project_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, project_id: Option<String>) -> Self {
        Self {
            ok: true,
            project_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            message: message.into(),
        }
    }
}

/// Submits the new-project form.
///
/// # FFI contract
/// - `people` is the raw field text; validation happens in core.
/// - Failure message is the user-facing alert text.
#[flutter_rust_bridge::frb(sync)]
pub fn board_submit_project(
    title: String,
    description: String,
    people: String,
) -> BoardActionResponse {
    match board().submit(title, description, people) {
        Ok(id) => BoardActionResponse::success("Project created.", Some(id.to_string())),
        Err(err) => BoardActionResponse::failure(err.to_string()),
    }
}

/// Returns both lists in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_lists() -> Vec<BoardListView> {
    board()
        .lists()
        .iter()
        .map(|list| to_board_list_view(list.status(), list.view()))
        .collect()
}

/// Starts dragging the card for `project_id`.
///
/// Returns `None` when no list shows that card.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_start(project_id: String) -> Option<BoardDragPayload> {
    let item = find_item(&project_id)?;
    let mut event = DragEvent::new();
    item.drag_start_handler(&mut event);

    let transfer = event.data_transfer?;
    let format = transfer.types().first()?.to_string();
    Some(BoardDragPayload {
        data: transfer.get_data(&format)?.to_string(),
        effect_allowed: transfer.effect_allowed.as_str().to_string(),
        format,
    })
}

/// Reports a drag hovering over the `target_status` list.
///
/// `types` are the payload types the host exposes during hover, in order.
/// `effect_allowed` is the source's effect string; drags that cannot move
/// are refused before the list sees them.
/// Returns whether the list accepts the drop.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_over(
    target_status: String,
    types: Vec<String>,
    effect_allowed: String,
) -> bool {
    let Some(status) = parse_status(&target_status) else {
        return false;
    };
    let effect = match EffectAllowed::parse(&effect_allowed) {
        Ok(effect) => effect,
        Err(err) => {
            warn!("event=ffi_effect module=ffi status=error reason={err}");
            return false;
        }
    };
    if !effect.allows_move() {
        return false;
    }
    let mut transfer = DataTransfer::new();
    for format in &types {
        transfer.set_data(format, "");
    }
    transfer.effect_allowed = effect;
    let mut event = DragEvent::with_transfer(transfer);
    board().list(status).drag_over_handler(&mut event);
    event.default_prevented()
}

/// Delivers a drop onto the `target_status` list.
///
/// # FFI contract
/// - `ok` is false only for an unknown target status.
/// - Ignored drops (wrong type, unknown id) still return `ok=true`; the
///   message tells whether the project moved.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drop(target_status: String, format: String, data: String) -> BoardActionResponse {
    let Some(status) = parse_status(&target_status) else {
        return BoardActionResponse::failure(format!(
            "board_drop failed: unknown status `{target_status}`"
        ));
    };
    let project_id = parse_project_id(&data);
    let mut transfer = DataTransfer::new();
    transfer.set_data(&format, data);
    let moved = board()
        .list(status)
        .drop_handler(&DragEvent::with_transfer(transfer));
    let message = if moved { "Project moved." } else { "Nothing to move." };
    BoardActionResponse::success(message, project_id.map(|id| id.to_string()))
}

/// Reports the drag leaving the `target_status` list.
///
/// Returns empty string on success and error message for unknown status.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_leave(target_status: String) -> String {
    match parse_status(&target_status) {
        Some(status) => {
            board()
                .list(status)
                .drag_leave_handler(&DragEvent::without_transfer());
            String::new()
        }
        None => format!("board_drag_leave failed: unknown status `{target_status}`"),
    }
}

/// Reports the end of a drag started with `board_drag_start`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_end(project_id: String, dropped: bool) {
    if let Some(item) = find_item(&project_id) {
        let mut event = DragEvent::without_transfer();
        if dropped {
            event.prevent_default();
        }
        item.drag_end_handler(&event);
    }
}

fn board() -> &'static Board {
    BOARD.get_or_init(Board::new)
}

fn find_item(project_id: &str) -> Option<ProjectItem> {
    let id = parse_project_id(project_id)?;
    board().lists().iter().find_map(|list| list.item(id))
}

fn parse_status(value: &str) -> Option<ProjectStatus> {
    match ProjectStatus::parse(value) {
        Ok(status) => Some(status),
        Err(err) => {
            warn!("event=ffi_status module=ffi status=error reason={err}");
            None
        }
    }
}

fn to_board_list_view(status: ProjectStatus, view: ListView) -> BoardListView {
    BoardListView {
        status: status.as_str().to_string(),
        element_id: view.element_id,
        list_id: view.list_id,
        heading: view.heading,
        droppable: view.droppable,
        items: view.items.into_iter().map(to_board_item_view).collect(),
    }
}

fn to_board_item_view(item: ItemView) -> BoardItemView {
    BoardItemView {
        project_id: item.element_id,
        title: item.title,
        participants: item.participants,
        description: item.description,
    }
}
