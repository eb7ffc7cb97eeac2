// Session module
// One conversation: assessment, transcript and chat state

mod state;
mod transcript;

pub use state::{
    is_exit_command, Reply, Session, EXIT_COMMANDS, FAREWELL_MESSAGE, WELCOME_BACK_MESSAGE,
    WELCOME_MESSAGE,
};
pub use transcript::{Role, Transcript, Turn};
