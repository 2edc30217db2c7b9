use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::command::{Command, CommandError, Request, RequestId, Response};

/// Request/response access to the backend.
///
/// `invoke` never blocks: it queues the command and returns the id its
/// response will carry. Responses are collected with `poll_responses` from
/// the UI loop, in arrival order.
pub trait Gateway {
    fn invoke(&mut self, command: Command) -> RequestId;

    fn poll_responses(&mut self) -> Vec<Response>;
}

/// Gateway backed by the channels of the backend worker thread.
pub struct ChannelGateway {
    next_id: RequestId,
    request_tx: UnboundedSender<Request>,
    response_rx: Receiver<Response>,
    /// Failures produced locally, delivered on the next poll like any
    /// other response.
    local: VecDeque<Response>,
}

impl ChannelGateway {
    pub fn new(request_tx: UnboundedSender<Request>, response_rx: Receiver<Response>) -> Self {
        Self {
            next_id: 0,
            request_tx,
            response_rx,
            local: VecDeque::new(),
        }
    }
}

impl Gateway for ChannelGateway {
    fn invoke(&mut self, command: Command) -> RequestId {
        self.next_id = self.next_id.wrapping_add(1);
        let request_id = self.next_id;
        let kind = command.kind();

        log::debug!("invoke `{}` (request {})", kind.name(), request_id);

        if self
            .request_tx
            .send(Request {
                request_id,
                command,
            })
            .is_err()
        {
            log::warn!("backend gone, `{}` rejected", kind.name());
            self.local.push_back(Response::new(
                request_id,
                kind,
                Err(CommandError::Disconnected),
            ));
        }

        request_id
    }

    fn poll_responses(&mut self) -> Vec<Response> {
        let mut responses: Vec<Response> = self.local.drain(..).collect();

        loop {
            match self.response_rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }

        responses
    }
}
