use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::footer::Footer;
use crate::components::problems_table::ProblemsTable;
use crate::components::register::{RegisterButton, RegisterLink};
use crate::components::results::Results;
use crate::components::section::RevealSection;
use crate::config::SiteConfig;

#[derive(Properties, Clone, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = &props.config;
    let deadline: Option<AttrValue> = config.deadline_iso.clone().map(AttrValue::from);
    let url = AttrValue::from(config.registration_url.clone());

    html! {
        <div class="landing-page min-h-screen flex flex-col bg-gradient-to-br from-slate-50 via-white to-indigo-50">
            // Hero with registration CTA and live countdown
            <RevealSection id="hero" class="relative overflow-hidden">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-16 sm:py-20 text-center">
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-gray-900 mb-6 leading-tight">
                        <span class="bg-gradient-to-r from-orange-500 to-indigo-600 bg-clip-text text-transparent">
                            {"HackIgnite 2025"}
                        </span>
                    </h1>
                    <p class="text-lg sm:text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                        {"A 36-hour hackathon for builders. "}
                        <span class="font-medium text-gray-800">{"Registration closes soon."}</span>
                    </p>
                    <div class="mb-8 flex justify-center">
                        <div class="rounded-2xl bg-slate-900 px-8 py-4 shadow-lg">
                            <Countdown deadline_iso={deadline} />
                        </div>
                    </div>
                    <RegisterButton
                        url={url.clone()}
                        class="inline-flex items-center justify-center px-8 py-4 text-lg font-semibold text-white bg-gradient-to-r from-orange-500 to-red-500 rounded-xl shadow-lg hover:shadow-xl transform hover:-translate-y-1 transition-all duration-200 active:scale-95"
                    >
                        {"Register Now"}
                    </RegisterButton>
                </div>
            </RevealSection>

            <main class="flex-1 container mx-auto px-4 sm:px-6 lg:px-8 space-y-16 pb-16">
                <RevealSection id="about">
                    <h2 class="text-2xl sm:text-3xl font-bold text-gray-900 mb-4">{"About the Event"}</h2>
                    <p class="text-gray-600 leading-relaxed max-w-3xl">
                        {"Teams of up to four pick a problem statement below, build for 36 hours, \
                          and demo to the judges. Food, mentors, and prizes provided."}
                    </p>
                </RevealSection>

                <RevealSection id="problems">
                    <h2 class="text-2xl sm:text-3xl font-bold text-gray-900 mb-4">{"Problem Statements"}</h2>
                    <p class="text-gray-500 text-sm mb-4">
                        {"Organizers: cells below are editable in place. Export shares the current table; \
                          reset restores the placeholder text."}
                    </p>
                    <ProblemsTable />
                </RevealSection>

                <RevealSection id="results-section">
                    <Results results={config.results.clone()} />
                </RevealSection>

                <RevealSection id="register-section" class="text-center">
                    <h2 class="text-2xl sm:text-3xl font-bold text-gray-900 mb-4">{"Ready to build?"}</h2>
                    <img src="assets/qr.png" alt="Registration QR code" class="mx-auto w-40 h-40 mb-4" />
                    <RegisterLink url={url} class="text-indigo-600 font-semibold hover:underline">
                        {"Or open the registration form directly"}
                    </RegisterLink>
                </RevealSection>
            </main>

            <Footer />
        </div>
    }
}
