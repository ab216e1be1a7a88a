pub mod create;
pub mod not_found;
pub mod tasks;

use dioxus::prelude::*;

use create::CreateTask;
use not_found::NotFound;
use tasks::TaskList;

/// Application routes: the create form at the root, the list/manage view
/// at /tasks.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    CreateTask {},
    #[route("/tasks")]
    TaskList {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
