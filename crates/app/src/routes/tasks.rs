use dioxus::prelude::*;
use shared_types::{AppError, TaskResponse};

use crate::format_helpers::format_due_date;
use crate::routes::Route;

/// Task list and management view: one fetch on mount, then a local copy
/// that the toggle/edit/delete actions mutate.
#[component]
pub fn TaskList() -> Element {
    let mut tasks = use_signal(Vec::<TaskResponse>::new);
    let mut notice = use_signal(|| None::<String>);
    let mut editing = use_signal(|| None::<TaskResponse>);
    let mut loading = use_signal(|| true);

    // Fetch once on mount. A "No tasks found" answer renders as the empty
    // state rather than an error.
    use_future(move || async move {
        match server::api::list_tasks().await {
            Ok(list) => tasks.set(list),
            Err(e) => notice.set(Some(AppError::friendly_message(&e.to_string()))),
        }
        loading.set(false);
    });

    rsx! {
        div { class: "container",
            header { class: "page-header",
                h1 { "Tasks" }
                Link { to: Route::CreateTask {}, "New Task" }
            }

            if let Some(msg) = &*notice.read() {
                div { class: "notice", "{msg}" }
            }

            if *loading.read() {
                p { class: "loading", "Loading tasks..." }
            } else if tasks.read().is_empty() {
                p { class: "empty", "Nothing to do." }
            } else {
                table { class: "task-table",
                    thead {
                        tr {
                            th { "Done" }
                            th { "Title" }
                            th { "Description" }
                            th { "Due" }
                            th { "" }
                        }
                    }
                    tbody {
                        for task in tasks() {
                            TaskRow {
                                key: "{task.id}",
                                task: task.clone(),
                                on_toggle: move |id: String| {
                                    // Optimistic: flip locally, push the partial
                                    // update, no rollback on failure.
                                    let next = {
                                        let mut list = tasks.write();
                                        match list.iter_mut().find(|t| t.id == id) {
                                            Some(t) => {
                                                t.is_completed = !t.is_completed;
                                                t.is_completed
                                            }
                                            None => return,
                                        }
                                    };
                                    spawn(async move {
                                        let _ = server::api::set_task_completed(id, next).await;
                                    });
                                },
                                on_edit: move |t: TaskResponse| editing.set(Some(t)),
                                on_delete: move |id: String| {
                                    // Remove locally only after the server confirms.
                                    spawn(async move {
                                        match server::api::delete_task(id.clone()).await {
                                            Ok(_) => tasks.write().retain(|t| t.id != id),
                                            Err(e) => notice.set(Some(
                                                AppError::friendly_message(&e.to_string()),
                                            )),
                                        }
                                    });
                                },
                            }
                        }
                    }
                }
            }

            if let Some(task) = editing() {
                EditTaskModal {
                    task,
                    on_close: move |_| editing.set(None),
                    on_saved: move |updated: TaskResponse| {
                        // Accept the server's returned task verbatim.
                        if let Some(t) = tasks.write().iter_mut().find(|t| t.id == updated.id) {
                            *t = updated;
                        }
                        editing.set(None);
                    },
                }
            }
        }
    }
}

#[component]
fn TaskRow(
    task: TaskResponse,
    on_toggle: EventHandler<String>,
    on_edit: EventHandler<TaskResponse>,
    on_delete: EventHandler<String>,
) -> Element {
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let edit_task = task.clone();

    rsx! {
        tr { class: if task.is_completed { "task-row completed" } else { "task-row" },
            td {
                input {
                    r#type: "checkbox",
                    checked: task.is_completed,
                    onchange: move |_| on_toggle.call(toggle_id.clone()),
                }
            }
            td { "{task.title}" }
            td { "{task.description}" }
            td { {format_due_date(&task.due_date)} }
            td {
                button { onclick: move |_| on_edit.call(edit_task.clone()), "Edit" }
                button { onclick: move |_| on_delete.call(delete_id.clone()), "Delete" }
            }
        }
    }
}

/// Edit modal, pre-filled from the selected task. The due date is shown
/// but deliberately not editable.
#[component]
fn EditTaskModal(
    task: TaskResponse,
    on_close: EventHandler<()>,
    on_saved: EventHandler<TaskResponse>,
) -> Element {
    let mut title = use_signal(|| task.title.clone());
    let mut description = use_signal(|| task.description.clone());
    let mut error_msg = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let task_id = task.id.clone();
    let due = format_due_date(&task.due_date);
    let due_for_save = due.clone();

    let handle_save = move |_: MouseEvent| {
        if *saving.read() {
            return;
        }

        let t = title.read().trim().to_string();
        let d = description.read().trim().to_string();
        if t.is_empty() || d.is_empty() {
            error_msg.set(Some("All fields are required".to_string()));
            return;
        }

        let id = task_id.clone();
        let due = due_for_save.clone();
        spawn(async move {
            saving.set(true);
            match server::api::update_task(id, t, d, due).await {
                Ok(updated) => on_saved.call(updated),
                Err(e) => error_msg.set(Some(AppError::friendly_message(&e.to_string()))),
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h2 { "Edit Task" }

                if let Some(err) = &*error_msg.read() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { "Title" }
                    input {
                        r#type: "text",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { "Description" }
                    textarea {
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { "Due date" }
                    input { r#type: "date", value: "{due}", disabled: true }
                }

                div { class: "modal-actions",
                    button { onclick: move |_| on_close.call(()), "Cancel" }
                    button {
                        disabled: *saving.read(),
                        onclick: handle_save,
                        if *saving.read() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
