//! Control requests sent to the session driver

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::timer::Frame;

/// The control operations a host can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Start,
    Pause,
    Reset,
    /// Stop every timer; the driver exits afterwards
    Dispose,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Reset => "reset",
            Command::Dispose => "dispose",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command plus the channel its resulting frame goes back on
#[derive(Debug)]
pub struct SessionRequest {
    pub command: Command,
    pub reply: oneshot::Sender<Frame>,
}
