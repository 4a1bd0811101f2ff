pub mod router_navigation;
pub mod url_param;
