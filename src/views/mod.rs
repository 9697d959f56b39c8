//! The views module contains the components for all Layouts and Routes for our app. Each layout and route in our [`Route`]
//! enum will render one of these components.
//!
//! The [`Navigation`] component will be rendered on all pages of our app since every page is under the layout. The layout
//! defines a common wrapper around all child routes.

mod dashboard;
pub use dashboard::Dashboard;

mod tips;
pub use tips::Tips;

mod navigation;
pub use navigation::Navigation;

mod not_found;
pub use not_found::NotFound;
