use crate::components::{Brand, Hero};
use crate::Route;
use dioxus::prelude::*;

const PAIN_POINTS: [&str; 6] = [
    "Scattered information across multiple tools",
    "Unclear project progress and bottlenecks",
    "Resource overload and confusion",
    "Deadline surprises and missed milestones",
    "Communication gaps and missed updates",
    "Reactive problem-solving instead of prevention",
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "👥",
        title: "Smart Team Management",
        description: "Effortlessly organize teams, assign roles, and track member contributions across projects.",
    },
    Feature {
        icon: "📊",
        title: "Intelligent Progress Tracking",
        description: "Visual dashboards that show real-time progress and proactively identify potential bottlenecks.",
    },
    Feature {
        icon: "💬",
        title: "Unified Communication",
        description: "Project-specific discussions that keep all conversations organized and accessible.",
    },
    Feature {
        icon: "✅",
        title: "Advanced Task Management",
        description: "Flexible task organization with priorities, deadlines, and smart status tracking.",
    },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    content: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Product Manager",
        company: "TechFlow Inc.",
        content: "SynergySphere transformed how our team collaborates. We're 40% more efficient now.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "Engineering Lead",
        company: "Innovation Labs",
        content: "The proactive insights helped us catch issues before they became problems.",
        rating: 5,
    },
];

/// Marketing landing page. Static content only.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gradient-surface",
            header { class: "border-b bg-white/80 backdrop-blur-sm sticky top-0 z-40",
                div { class: "max-w-6xl mx-auto px-4 h-16 flex items-center justify-between",
                    Brand {}
                    div { class: "flex items-center gap-4",
                        Link { to: Route::Login {}, class: "text-sm font-medium text-gray-700 hover:text-gray-900", "Sign In" }
                        Link {
                            to: Route::Login {},
                            class: "bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors shadow-elegant",
                            "Get Started"
                        }
                    }
                }
            }

            Hero {}

            section { class: "py-16 px-4 bg-white/50",
                div { class: "max-w-6xl mx-auto",
                    div { class: "text-center mb-12",
                        h2 { class: "text-3xl font-bold text-gray-900 mb-4", "Stop Fighting These Daily Frustrations" }
                        p { class: "text-gray-600 max-w-2xl mx-auto",
                            "Every team deals with the same productivity killers. SynergySphere eliminates them."
                        }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for pain in PAIN_POINTS {
                            div { key: "{pain}", class: "flex items-start gap-3 p-4 rounded-lg bg-white shadow-sm",
                                div { class: "w-2 h-2 bg-red-500 rounded-full mt-2 flex-shrink-0" }
                                p { class: "text-gray-900 font-medium", "{pain}" }
                            }
                        }
                    }
                }
            }

            section { class: "py-20 px-4",
                div { class: "max-w-6xl mx-auto",
                    div { class: "text-center mb-16",
                        h2 { class: "text-4xl font-bold text-gray-900 mb-4", "Everything Your Team Needs" }
                        p { class: "text-xl text-gray-600 max-w-2xl mx-auto",
                            "From task tracking to team discussions, all in one place."
                        }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                        for feature in FEATURES.iter() {
                            div { key: "{feature.title}", class: "bg-white rounded-lg shadow-md p-6 hover:shadow-lg transition-shadow",
                                div { class: "w-12 h-12 bg-gradient-primary rounded-lg flex items-center justify-center text-2xl mb-4",
                                    "{feature.icon}"
                                }
                                h3 { class: "text-xl font-bold mb-2", "{feature.title}" }
                                p { class: "text-gray-600", "{feature.description}" }
                            }
                        }
                    }
                }
            }

            section { class: "py-16 px-4 bg-white/50",
                div { class: "max-w-6xl mx-auto",
                    h2 { class: "text-3xl font-bold text-gray-900 mb-12 text-center", "Loved by Teams Everywhere" }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                        for testimonial in TESTIMONIALS.iter() {
                            div { key: "{testimonial.name}", class: "bg-white rounded-lg shadow-md p-6",
                                div { class: "text-yellow-500 mb-4",
                                    for _ in 0..testimonial.rating {
                                        span { "★" }
                                    }
                                }
                                p { class: "text-gray-900 italic mb-4", "\"{testimonial.content}\"" }
                                p { class: "font-semibold text-gray-900", "{testimonial.name}" }
                                p { class: "text-sm text-gray-600", "{testimonial.role} at {testimonial.company}" }
                            }
                        }
                    }
                }
            }

            section { class: "py-20 px-4 bg-gradient-primary text-white text-center",
                h2 { class: "text-4xl font-bold mb-4", "Ready to Transform Your Team?" }
                p { class: "text-xl opacity-90 mb-8 max-w-2xl mx-auto",
                    "Join the teams already using SynergySphere to stay in sync."
                }
                Link {
                    to: Route::Login {},
                    class: "inline-block bg-white text-purple-600 px-8 py-4 rounded-lg font-semibold text-lg hover:bg-gray-100 transition-colors",
                    "Get Started Today →"
                }
            }

            footer { class: "py-8 px-4 border-t bg-white",
                div { class: "max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4",
                    Brand {}
                    p { class: "text-sm text-gray-500", "🛡 Enterprise-grade security. Your data stays yours." }
                }
            }
        }
    }
}
