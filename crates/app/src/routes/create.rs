use dioxus::prelude::*;
use shared_types::AppError;

use crate::routes::Route;

/// Task creation form. Validates the three required fields client-side,
/// then posts to the server and navigates to the list screen on success.
#[component]
pub fn CreateTask() -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut due_date = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if *submitting.read() {
            return;
        }

        let t = title.read().trim().to_string();
        let d = description.read().trim().to_string();
        let due = due_date.read().trim().to_string();

        if t.is_empty() || d.is_empty() || due.is_empty() {
            error_msg.set(Some("All fields are required".to_string()));
            return;
        }

        spawn(async move {
            submitting.set(true);
            error_msg.set(None);

            match server::api::create_task(t, d, due).await {
                Ok(_) => {
                    navigator().push(Route::TaskList {});
                }
                Err(e) => {
                    error_msg.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "container",
            header { class: "page-header",
                h1 { "New Task" }
                Link { to: Route::TaskList {}, "View Tasks" }
            }

            if let Some(err) = &*error_msg.read() {
                div { class: "error-message", "{err}" }
            }

            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { r#for: "title", "Title" }
                    input {
                        id: "title",
                        r#type: "text",
                        placeholder: "What needs doing?",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        placeholder: "Details",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { r#for: "due-date", "Due date" }
                    input {
                        id: "due-date",
                        r#type: "date",
                        value: "{due_date}",
                        oninput: move |evt| due_date.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    disabled: *submitting.read(),
                    if *submitting.read() { "Saving..." } else { "Add Task" }
                }
            }
        }
    }
}
