use tokio::sync::mpsc;
use crate::enums::route::Route;
use crate::traits::navigator::Navigator;

/// Forwards navigation requests to whoever owns the receiving end: the
/// command loop in the terminal, or the request handler on the server.
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<Route>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        log::debug!("Navigating to {}", route.path());
        if self.sender.send(route).is_err() {
            log::warn!("⚠️ Navigation request dropped, nobody is listening");
        }
    }
}
