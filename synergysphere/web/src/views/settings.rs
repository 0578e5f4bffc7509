use crate::components::{BackLink, Header};
use crate::state::{sign_out, use_auth, use_toasts};
use crate::Route;
use dioxus::prelude::*;
use synergysphere_core::{
    Language, NotificationKey, PreferenceChange, Settings, Theme, Timezone, Visibility,
};

/// Switches shown on the page. Marketing emails stay in the stored
/// preferences without a switch.
const SHOWN_NOTIFICATIONS: [NotificationKey; 5] = [
    NotificationKey::Email,
    NotificationKey::Push,
    NotificationKey::TaskUpdates,
    NotificationKey::ProjectMessages,
    NotificationKey::WeeklyDigest,
];

/// Preferences page. Every change is applied immediately and acknowledged.
#[component]
pub fn SettingsView() -> Element {
    let mut settings = use_signal(Settings::default);
    let auth = use_auth();
    let toasts = use_toasts();
    let nav = navigator();

    let mut apply = move |change: PreferenceChange| {
        let notice = settings.write().apply(change);
        toasts.show(notice);
    };

    // Selects report their option value; parse it back through the string form.
    let mut set_preference = move |group: &str, key: &str, value: String| {
        match settings.write().set_preference(group, key, &value) {
            Ok(notice) => toasts.show(notice),
            Err(e) => tracing::warn!(%e, "rejected preference"),
        }
    };


    let current = *settings.read();

    rsx! {
        div { class: "min-h-screen bg-gradient-surface",
            Header {}

            main { class: "max-w-4xl mx-auto px-4 py-8 space-y-6",
                BackLink { to: Route::Dashboard {}, label: "Back to Dashboard" }
                div {
                    h1 { class: "text-3xl font-bold text-gray-900", "Settings" }
                    p { class: "text-gray-600", "Manage your account preferences and settings." }
                }

                SettingsCard { title: "Notifications", description: "Choose what you want to be notified about.",
                    for key in SHOWN_NOTIFICATIONS {
                        div { key: "{key.as_str()}", class: "flex items-center justify-between py-2",
                            span { class: "text-gray-900", "{key.label()}" }
                            Switch {
                                checked: current.notifications.get(key),
                                on_toggle: move |on: bool| apply(PreferenceChange::Notification(key, on)),
                            }
                        }
                    }
                }

                SettingsCard { title: "Appearance", description: "Customize how SynergySphere looks for you.",
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        div {
                            label { class: "block text-sm font-medium mb-1", "Theme" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                onchange: move |evt: FormEvent| set_preference("appearance", "theme", evt.value()),
                                for theme in Theme::ALL.iter().copied() {
                                    option { value: "{theme.as_str()}", selected: theme == current.appearance.theme, "{theme.label()}" }
                                }
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium mb-1", "Language" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                onchange: move |evt: FormEvent| set_preference("appearance", "language", evt.value()),
                                for language in Language::ALL.iter().copied() {
                                    option { value: "{language.as_str()}", selected: language == current.appearance.language, "{language.label()}" }
                                }
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium mb-1", "Timezone" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                onchange: move |evt: FormEvent| set_preference("appearance", "timezone", evt.value()),
                                for timezone in Timezone::ALL.iter().copied() {
                                    option { value: "{timezone.as_str()}", selected: timezone == current.appearance.timezone, "{timezone.label()}" }
                                }
                            }
                        }
                    }
                }

                SettingsCard { title: "Privacy & Security", description: "Control who can see your information.",
                    div { class: "space-y-4",
                        div {
                            label { class: "block text-sm font-medium mb-1", "Profile Visibility" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                onchange: move |evt: FormEvent| set_preference("privacy", "profileVisibility", evt.value()),
                                for visibility in Visibility::ALL.iter().copied() {
                                    option { value: "{visibility.as_str()}", selected: visibility == current.privacy.profile_visibility, "{visibility.label()}" }
                                }
                            }
                        }
                        div { class: "flex items-center justify-between",
                            span { class: "text-gray-900", "Show activity status" }
                            Switch {
                                checked: current.privacy.activity_status,
                                on_toggle: move |on: bool| apply(PreferenceChange::ActivityStatus(on)),
                            }
                        }
                        div { class: "flex items-center justify-between",
                            span { class: "text-gray-900", "Show task progress" }
                            Switch {
                                checked: current.privacy.task_progress,
                                on_toggle: move |on: bool| apply(PreferenceChange::TaskProgress(on)),
                            }
                        }
                    }
                }

                SettingsCard { title: "Account", description: "Sign out or remove your account.",
                    div { class: "flex flex-col md:flex-row gap-4",
                        button {
                            class: "px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50",
                            onclick: move |_| sign_out(auth, toasts, nav),
                            "Log Out"
                        }
                        button {
                            class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700",
                            onclick: move |_| toasts.show(settings.read().request_account_deletion()),
                            "Delete Account"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SettingsCard(title: String, description: String, children: Element) -> Element {
    rsx! {
        section { class: "bg-white rounded-lg shadow-md p-6",
            h2 { class: "text-xl font-semibold text-gray-900", "{title}" }
            p { class: "text-sm text-gray-600 mb-4", "{description}" }
            {children}
        }
    }
}

/// On/off switch. Reports the new state.
#[component]
fn Switch(checked: bool, on_toggle: EventHandler<bool>) -> Element {
    let track = if checked { "bg-purple-600" } else { "bg-gray-300" };
    let knob = if checked { "translate-x-5" } else { "translate-x-0" };

    rsx! {
        button {
            r#type: "button",
            role: "switch",
            aria_checked: "{checked}",
            class: "relative inline-flex h-6 w-11 rounded-full transition-colors {track}",
            onclick: move |_| on_toggle.call(!checked),
            span { class: "inline-block h-5 w-5 mt-0.5 ml-0.5 rounded-full bg-white shadow transform transition-transform {knob}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_switch_but_marketing_is_shown() {
        let hidden: Vec<_> = NotificationKey::ALL
            .iter()
            .copied()
            .filter(|key| !SHOWN_NOTIFICATIONS.contains(key))
            .collect();

        assert_eq!(hidden, vec![NotificationKey::Marketing]);
    }
}
