//! Mission card carousel. Focusing a card also moves the map highlight.

use leptos::prelude::*;
use shell::component::Component;

use crate::state::catalog::{MISSIONS, Mission};
use crate::state::home::HomeState;

#[component]
pub fn MissionCards() -> impl IntoView {
    super::status_on_mount(Component::Missions);

    let home = expect_context::<RwSignal<HomeState>>();
    let focused = move || home.get().missions.index;

    view! {
        <section class="carousel carousel--missions">
            <button class="carousel__nav" title="Previous mission" on:click=move |_| home.update(|h| h.missions.prev())>
                "\u{2039}"
            </button>
            <div class="carousel__track">
                {MISSIONS
                    .iter()
                    .enumerate()
                    .map(|(index, mission)| {
                        view! {
                            <MissionCard
                                mission=*mission
                                focused=Signal::derive(move || focused() == index)
                                on_focus=Callback::new(move |()| home.update(|h| h.missions.select(index)))
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="carousel__nav" title="Next mission" on:click=move |_| home.update(|h| h.missions.next())>
                "\u{203A}"
            </button>
        </section>
    }
}

#[component]
fn MissionCard(mission: Mission, focused: Signal<bool>, on_focus: Callback<()>) -> impl IntoView {
    view! {
        <article
            class=format!("mission-card mission-card--{}", mission.status.css_modifier())
            class:mission-card--focused=move || focused.get()
            on:click=move |_| on_focus.run(())
        >
            <span class="mission-card__id">{mission.id}</span>
            <h3 class="mission-card__codename">{mission.codename}</h3>
            <span class="mission-card__region">{mission.region}</span>
            <span class="mission-card__status">{mission.status.label()}</span>
        </article>
    }
}
