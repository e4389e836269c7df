use yew::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Programmatic navigation back into the root router, used for the
    /// unauthenticated bounce and for logout.
    pub navigate: Callback<Route>,
}
