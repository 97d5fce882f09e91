use crate::analytics::{track_event, JOIN_SUBMITTED};
use crate::config::SiteConfig;
use crate::join::{self, FormInput, Handoff, JoinForm as JoinFormState, Role};
use leptos::*;

/// Sign-up form. Submitting opens a pre-filled email draft rather than
/// posting anywhere.
#[component]
pub fn JoinForm() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let handoff = use_context::<Handoff>().unwrap_or_else(Handoff::browser);

    let form = create_rw_signal(JoinFormState::default());

    // Only reached once the browser's `required` checks pass
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.with_untracked(|state| {
            join::submit(state, &config, handoff.0.as_ref());
        });
        track_event(JOIN_SUBMITTED);
    };

    view! {
        <section id="join" class="card">
            <h3>"Join the Movement"</h3>
            <p class="lead">
                "Volunteer, invest, or partner \u{2014} everyone contributes value. "
                "Tell us how you want to help."
            </p>

            <form class="join-form" on:submit=on_submit>
                <input
                    aria-label="Your name"
                    placeholder="Your name"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.apply(FormInput::Name(event_target_value(&ev))))
                />
                <select
                    aria-label="Role"
                    on:change=move |ev| form.update(|f| f.apply(FormInput::Role(event_target_value(&ev))))
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! {
                            <option
                                value=role.label()
                                selected=move || form.with(|f| f.role == role)
                            >
                                {role.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <input
                    aria-label="Email"
                    placeholder="Email"
                    required
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.apply(FormInput::Email(event_target_value(&ev))))
                />

                <button type="submit" class="btn btn-primary join-submit">"Send & Join"</button>
            </form>

            <p class="note">
                "No money yet? No problem. Contribute skills, time, or spread the word \u{2014} "
                "every action is an investment."
            </p>
        </section>
    }
}
