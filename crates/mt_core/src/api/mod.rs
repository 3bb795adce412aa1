pub mod json_api;

pub use json_api::{
    clock_view_json, execute_command_json, roster_view_json, summary_view_json, CommandRequest,
    CommandResponse,
};
