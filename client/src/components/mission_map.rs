//! Grid map plotting every mission, with the focused mission highlighted.

use leptos::prelude::*;
use shell::component::Component;

use crate::state::catalog::MISSIONS;
use crate::state::home::HomeState;

#[component]
pub fn MissionMap() -> impl IntoView {
    super::status_on_mount(Component::Map);

    let home = expect_context::<RwSignal<HomeState>>();
    let focused = move || home.get().focused_mission().map(|m| m.id);

    view! {
        <div class="mission-map">
            <div class="mission-map__grid"></div>
            {MISSIONS
                .iter()
                .map(|mission| {
                    let id = mission.id;
                    view! {
                        <button
                            class=format!("mission-map__marker mission-map__marker--{}", mission.status.css_modifier())
                            class:mission-map__marker--focused=move || focused() == Some(id)
                            style:left=format!("{}%", mission.x)
                            style:top=format!("{}%", mission.y)
                            title=mission.codename
                            on:click=move |_| home.update(|h| h.focus_mission(id))
                        ></button>
                    }
                })
                .collect::<Vec<_>>()}
            <span class="mission-map__caption">
                {move || home.get().focused_mission().map(|m| m.region).unwrap_or_default()}
            </span>
        </div>
    }
}
