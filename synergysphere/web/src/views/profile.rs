use crate::components::{Avatar, BackLink, Header};
use crate::state::{use_current_user, use_toasts};
use crate::Route;
use dioxus::prelude::*;
use synergysphere_core::{Profile, ProfilePage};

fn edit_profile(page: &mut Signal<ProfilePage>, change: impl FnOnce(&mut Profile)) {
    if let Err(e) = page.write().edit(change) {
        tracing::warn!(%e, "dropping profile edit");
    }
}

#[component]
pub fn ProfileView() -> Element {
    let user = use_current_user();
    let mut page = use_signal(move || ProfilePage::seeded(user.as_ref()));
    let toasts = use_toasts();

    let profile = page.read().profile().clone();
    let editing = page.read().is_editing();
    let stats = page.read().stats();
    let activity = page.read().activity();
    let joined = profile.join_date.format("%B %Y").to_string();

    rsx! {
        div { class: "min-h-screen bg-gradient-surface",
            Header {}

            main { class: "max-w-4xl mx-auto px-4 py-8",
                div { class: "mb-6", BackLink { to: Route::Dashboard {}, label: "Back to Dashboard" } }

                div { class: "bg-white rounded-lg shadow-md p-6 mb-6",
                    div { class: "flex items-start justify-between",
                        div { class: "flex items-center gap-4",
                            Avatar { name: profile.name.clone(), src: profile.avatar.clone(), size: "w-20 h-20" }
                            div {
                                h1 { class: "text-2xl font-bold text-gray-900", "{profile.name}" }
                                p { class: "text-gray-600", "{profile.role} · {profile.department}" }
                                p { class: "text-sm text-gray-500", "📍 {profile.location} · Joined {joined}" }
                            }
                        }
                        div { class: "flex gap-2",
                            if editing {
                                button {
                                    class: "px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50",
                                    onclick: move |_| {
                                        page.write().cancel();
                                    },
                                    "Cancel"
                                }
                            }
                            button {
                                class: "px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 font-medium",
                                onclick: move |_| {
                                    let notice = page.write().toggle_edit();
                                    toasts.show_opt(notice);
                                },
                                if editing { "Save Changes" } else { "Edit Profile" }
                            }
                        }
                    }
                }

                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-6",
                    for stat in stats.iter() {
                        div { key: "{stat.label}", class: "bg-white rounded-lg shadow-md p-4 text-center",
                            div { class: "text-2xl font-bold text-purple-700", "{stat.value}" }
                            div { class: "text-sm text-gray-600", "{stat.label}" }
                        }
                    }
                }

                div { class: "bg-white rounded-lg shadow-md p-6",
                    h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Personal Information" }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        ProfileField {
                            label: "Full Name",
                            value: profile.name.clone(),
                            editing,
                            on_input: move |v: String| edit_profile(&mut page, |p| p.name = v),
                        }
                        ProfileField {
                            label: "Email",
                            value: profile.email.clone(),
                            editing,
                            on_input: move |v: String| edit_profile(&mut page, |p| p.email = v),
                        }
                        ProfileField {
                            label: "Phone",
                            value: profile.phone.clone(),
                            editing,
                            on_input: move |v: String| edit_profile(&mut page, |p| p.phone = v),
                        }
                        ProfileField {
                            label: "Location",
                            value: profile.location.clone(),
                            editing,
                            on_input: move |v: String| edit_profile(&mut page, |p| p.location = v),
                        }
                        ProfileField {
                            label: "Role",
                            value: profile.role.clone(),
                            editing,
                            on_input: move |v: String| edit_profile(&mut page, |p| p.role = v),
                        }
                        ProfileField {
                            label: "Department",
                            value: profile.department.clone(),
                            editing,
                            on_input: move |v: String| edit_profile(&mut page, |p| p.department = v),
                        }
                        ProfileField {
                            label: "Timezone",
                            value: profile.timezone.clone(),
                            editing,
                            on_input: move |v: String| edit_profile(&mut page, |p| p.timezone = v),
                        }
                    }
                    div { class: "mt-4",
                        label { class: "block text-sm font-medium text-gray-500 mb-1", "Bio" }
                        if editing {
                            textarea {
                                rows: "4",
                                value: "{profile.bio}",
                                oninput: move |evt: FormEvent| edit_profile(&mut page, |p| p.bio = evt.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                            }
                        } else {
                            p { class: "text-gray-700", "{profile.bio}" }
                        }
                    }
                }

                div { class: "bg-white rounded-lg shadow-md p-6 mt-6",
                    h2 { class: "text-xl font-semibold text-gray-900", "Recent Activity" }
                    p { class: "text-sm text-gray-600 mb-4", "Your latest actions and contributions" }
                    div { class: "space-y-3",
                        for activity in activity.iter() {
                            div { key: "{activity.action}", class: "flex justify-between items-start",
                                span { class: "text-sm", "{activity.action}" }
                                span { class: "text-xs text-gray-500 whitespace-nowrap ml-4", "{activity.time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Read-only text, or a text input while editing.
#[component]
fn ProfileField(label: String, value: String, editing: bool, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-500 mb-1", "{label}" }
            if editing {
                input {
                    r#type: "text",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                }
            } else {
                p { class: "text-gray-900", "{value}" }
            }
        }
    }
}
