use crate::session::LOGIN_PATH;
use leptos::prelude::*;

pub(crate) const PRIVACY_PATH: &str = "/privacy";

const LAST_UPDATED: &str = "December 24, 2025";

struct PolicySection {
    title: &'static str,
    paragraphs: &'static [&'static str],
    items: &'static [&'static str],
}

static SECTIONS: [PolicySection; 7] = [
    PolicySection {
        title: "Introduction",
        paragraphs: &[
            "LinkedIn Post Generator (\"we\", \"us\", \"our\") operates this website. This page explains how we collect, use and disclose personal data when you use the service, and the choices you have about that data.",
        ],
        items: &[],
    },
    PolicySection {
        title: "Information Collection and Use",
        paragraphs: &[
            "When you sign in with LinkedIn we store your basic profile: email address, name, LinkedIn ID and profile picture (if available).",
            "We store the posts and calendar ideas you create. This content is tied to your account so you can manage and share it.",
            "We may collect information about how the site is accessed, such as browser type, IP address and pages visited.",
        ],
        items: &[],
    },
    PolicySection {
        title: "Use of Data",
        paragraphs: &["We use the collected data to:"],
        items: &[
            "Provide and maintain the service",
            "Notify you about changes to the service",
            "Provide customer support",
            "Improve the service",
            "Detect and address technical issues",
        ],
    },
    PolicySection {
        title: "Third-Party Services",
        paragraphs: &["The service relies on third parties that may process your data:"],
        items: &[
            "Supabase, for authentication and data storage (https://supabase.com/privacy)",
            "OpenAI, for content generation (https://openai.com/privacy)",
            "LinkedIn, for sign-in and sharing (https://www.linkedin.com/legal/privacy-policy)",
        ],
    },
    PolicySection {
        title: "Security of Data",
        paragraphs: &[
            "No method of transmission over the Internet or of electronic storage is completely secure. We use commercially acceptable means to protect your data but cannot guarantee its absolute security.",
        ],
        items: &[],
    },
    PolicySection {
        title: "Changes to This Privacy Policy",
        paragraphs: &[
            "We may update this policy from time to time. Changes are posted on this page with a new \"Last updated\" date.",
        ],
        items: &[],
    },
    PolicySection {
        title: "Contact Us",
        paragraphs: &["If you have questions about this policy, contact us through the website."],
        items: &[],
    },
];

/// Public privacy policy. LinkedIn requires one for apps using its sign-in.
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-background px-4 py-12 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-3xl space-y-6">
                <h1 class="text-4xl font-bold">"Privacy Policy"</h1>
                <p class="text-sm text-muted-foreground">"Last updated: " {LAST_UPDATED}</p>

                {SECTIONS
                    .iter()
                    .enumerate()
                    .map(|(index, section)| {
                        view! {
                            <section class="space-y-3">
                                <h2 class="mt-8 text-2xl font-semibold">
                                    {format!("{}. {}", index + 1, section.title)}
                                </h2>
                                {section.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                                {(!section.items.is_empty()).then(|| view! {
                                    <ul class="list-disc space-y-1 pl-6">
                                        {section.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                })}
                            </section>
                        }
                    })
                    .collect_view()}

                <a class="inline-block text-sm text-primary underline underline-offset-4" href=LOGIN_PATH>
                    "Back to sign in"
                </a>
            </div>
        </main>
    }
}
