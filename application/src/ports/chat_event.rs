//! Messages exchanged between the controller task and the presentation layer
//!
//! Commands flow into the controller; events flow out to whatever front end
//! is rendering the session. Both travel over unbounded mpsc channels, so a
//! slow renderer never stalls the controller.

use gemcat_domain::ModelReply;

use crate::ports::chat_gateway::GatewayError;

/// Commands accepted by the controller task
#[derive(Debug)]
pub enum ChatCommand {
    /// User pressed send with this input text.
    Submit(String),
    /// A spawned request task finished; carries the gateway's verdict.
    /// Posted by the controller to itself, never by the front end.
    Completed(Result<ModelReply, GatewayError>),
}

/// Events emitted by the controller for the presentation layer to render
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A request was dispatched; the session is now busy.
    SendStarted,
    /// Line to show on the model's side of the transcript. Emitted for
    /// replies, fallbacks, and error diagnostics alike.
    BotMessage(String),
    /// The pending send resolved; the session is idle again.
    SendFinished,
}
