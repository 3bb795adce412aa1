//! JSON command/view surface for host integration.
//!
//! The rendering collaborator drives the engine exclusively through this
//! surface: commands arrive as tagged JSON objects, views leave as JSON
//! snapshots. Malformed input and rejected commands both come back as
//! `ok: false` responses; nothing here panics on caller input.

use serde::{Deserialize, Serialize};

use crate::engine::SessionEngine;
use crate::error::{ErrorKind, SessionError};
use crate::models::{DisciplinaryEvent, PlayerId, Side};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandRequest {
    AddPlayer { name: String, dorsal: String },
    EditPlayer { id: PlayerId, name: String, dorsal: String },
    Substitute { out_id: PlayerId, in_id: PlayerId },
    RecordEvent { id: PlayerId, event: DisciplinaryEvent },
    SetScore { side: Side, value: u32 },
    Start,
    Pause,
    Finalize,
    Reset,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub schema_version: u8,
    pub ok: bool,
    /// Set for successful `add_player` commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl CommandResponse {
    fn accepted() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: true,
            player_id: None,
            error: None,
            error_kind: None,
        }
    }

    fn accepted_with_player(id: PlayerId) -> Self {
        Self { player_id: Some(id), ..Self::accepted() }
    }

    fn rejected(message: String, kind: ErrorKind) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            player_id: None,
            error: Some(message),
            error_kind: Some(kind),
        }
    }
}

impl From<SessionError> for CommandResponse {
    fn from(err: SessionError) -> Self {
        let kind = err.kind();
        Self::rejected(err.to_string(), kind)
    }
}

/// Parse and dispatch one command, returning the response as JSON.
pub fn execute_command_json(engine: &mut SessionEngine, request_json: &str) -> String {
    let response = match serde_json::from_str::<CommandRequest>(request_json) {
        Ok(request) => dispatch(engine, request),
        Err(err) => {
            CommandResponse::rejected(format!("malformed request: {}", err), ErrorKind::Validation)
        }
    };
    serde_json::to_string(&response).expect("CommandResponse serialization cannot fail")
}

fn dispatch(engine: &mut SessionEngine, request: CommandRequest) -> CommandResponse {
    let result = match request {
        CommandRequest::AddPlayer { name, dorsal } => {
            return match engine.add_player(&name, &dorsal) {
                Ok(id) => CommandResponse::accepted_with_player(id),
                Err(err) => err.into(),
            }
        }
        CommandRequest::EditPlayer { id, name, dorsal } => engine.edit_player(id, &name, &dorsal),
        CommandRequest::Substitute { out_id, in_id } => engine.substitute(out_id, in_id),
        CommandRequest::RecordEvent { id, event } => engine.record_event(id, event),
        CommandRequest::SetScore { side, value } => {
            engine.set_score(side, value);
            Ok(())
        }
        CommandRequest::Start => engine.start(),
        CommandRequest::Pause => engine.pause(),
        CommandRequest::Finalize => engine.finalize(),
        CommandRequest::Reset => {
            engine.reset();
            Ok(())
        }
    };
    match result {
        Ok(()) => CommandResponse::accepted(),
        Err(err) => err.into(),
    }
}

/// Full roster snapshot plus derived starter/bench id lists.
pub fn roster_view_json(engine: &SessionEngine) -> String {
    let session = engine.session();
    serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "players": session.players(),
        "starters": session.starters().map(|p| p.id).collect::<Vec<_>>(),
        "bench": session.bench().map(|p| p.id).collect::<Vec<_>>(),
    })
    .to_string()
}

/// Clock state, formatted elapsed time and scoreboard.
pub fn clock_view_json(engine: &SessionEngine) -> String {
    serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "clock": engine.clock_view(),
    })
    .to_string()
}

/// Finalize-time summary rows. Fails with `SummaryNotReady` until the match
/// is finished.
pub fn summary_view_json(engine: &SessionEngine) -> crate::error::Result<String> {
    let rows = engine.summary_view()?;
    Ok(serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "rows": rows,
    })
    .to_string())
}
