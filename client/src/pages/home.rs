//! Home desktop. Each widget gets its own sub-container; the mission map
//! stays mounted beside whichever section the taskbar selects.

use leptos::prelude::*;
use shell::sequencer::Phase;

use crate::components::active_missions::ActiveMissions;
use crate::components::app_cards::AppCards;
use crate::components::header::Header;
use crate::components::mission_cards::MissionCards;
use crate::components::mission_map::MissionMap;
use crate::components::navigation::Navigation;
use crate::state::home::{HomeState, Section};

#[component]
pub fn HomeScreen() -> impl IntoView {
    let home = RwSignal::new(HomeState::default());
    provide_context(home);
    super::announce_mounted(Phase::Home);

    let section = move || home.get().section;

    view! {
        <div id=Phase::Home.root_id() class="home-screen">
            <div id="header-container">
                <Header/>
            </div>
            <main class="home-screen__main">
                <div
                    id="section-container"
                    class="home-screen__section"
                    class:home-screen__section--hidden=move || section() == Section::Map
                >
                    {move || match section() {
                        Section::Missions => {
                            view! {
                                <div id="missions-container">
                                    <MissionCards/>
                                </div>
                                <div id="active-missions-container">
                                    <ActiveMissions/>
                                </div>
                            }
                                .into_any()
                        }
                        Section::Apps => {
                            view! {
                                <div id="apps-container">
                                    <AppCards/>
                                </div>
                            }
                                .into_any()
                        }
                        Section::Map => ().into_any(),
                    }}
                </div>
                <div
                    id="map-container"
                    class="home-screen__map"
                    class:home-screen__map--full=move || section() == Section::Map
                >
                    <MissionMap/>
                </div>
            </main>
            <div id="navigation-container">
                <Navigation/>
            </div>
        </div>
    }
}
