use crate::enums::route::Route;

/// Navigation capability handed to the presenter by its host.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
