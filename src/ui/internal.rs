/// Internal demo page

use js_sys::Date;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use yew::prelude::*;

const QUOTES: [&str; 5] = [
    "\"The best way to predict the future is to invent it.\" - Alan Kay",
    "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"Simplicity is the soul of efficiency.\" - Austin Freeman",
    "\"Make it work, make it right, make it fast.\" - Kent Beck",
];

const GRADIENTS: [&str; 6] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #a18cd1 0%, #fbc2eb 100%)",
];

#[derive(Clone, PartialEq)]
enum DemoOutput {
    None,
    Alert(String),
    Quote(&'static str),
    Gradient(usize),
}

#[function_component(InternalPage)]
pub fn internal_page() -> Html {
    let time = use_state(|| clock_time(&Date::new_0()));
    let date = use_state(|| clock_date(&Date::new_0()));
    let random_stat = use_state(|| (js_sys::Math::random() * 100.0) as u8);
    let output = use_state(|| DemoOutput::None);
    let gradient = use_state(|| 0usize);

    // 1 Hz stat refresh, cleared when the component unmounts
    {
        let time = time.clone();
        let date = date.clone();
        let random_stat = random_stat.clone();
        use_effect_with((), move |_| {
            let tick = Closure::wrap(Box::new(move || {
                let now = Date::new_0();
                time.set(clock_time(&now));
                date.set(clock_date(&now));
                random_stat.set((js_sys::Math::random() * 100.0) as u8);
            }) as Box<dyn Fn()>);

            let handle = web_sys::window().and_then(|window| {
                window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        1_000,
                    )
                    .ok()
            });

            move || {
                if let (Some(window), Some(id)) = (web_sys::window(), handle) {
                    window.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    let on_alert = {
        let output = output.clone();
        Callback::from(move |_| {
            output.set(DemoOutput::Alert(clock_time(&Date::new_0())));
        })
    };

    let on_quote = {
        let output = output.clone();
        Callback::from(move |_| {
            let idx = (js_sys::Math::random() * QUOTES.len() as f64) as usize % QUOTES.len();
            output.set(DemoOutput::Quote(QUOTES[idx]));
        })
    };

    let on_gradient = {
        let gradient = gradient.clone();
        let output = output.clone();
        Callback::from(move |_| {
            let next = (*gradient + 1) % GRADIENTS.len();
            gradient.set(next);
            apply_gradient(GRADIENTS[next]);
            output.set(DemoOutput::Gradient(next));
        })
    };

    let page_url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();

    html! {
        <div class="internal-page">
            <h1>{"Internal Demo Page"}</h1>
            <p class="page-url">{page_url}</p>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-value">{(*time).clone()}</span>
                    <span class="stat-label">{"Time"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{(*date).clone()}</span>
                    <span class="stat-label">{"Date"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{*random_stat}</span>
                    <span class="stat-label">{"Random"}</span>
                </div>
            </div>

            <div class="demo-buttons">
                <button onclick={on_alert}>{"Show Alert"}</button>
                <button onclick={on_quote}>{"Random Quote"}</button>
                <button onclick={on_gradient}>{"Change Background"}</button>
            </div>

            <div class="demo-output">
                {match &*output {
                    DemoOutput::None => html! {},
                    DemoOutput::Alert(at) => html! {
                        <p><strong>{"Alert!"}</strong> {format!(" You clicked the alert button at {at}")}</p>
                    },
                    DemoOutput::Quote(quote) => html! {
                        <p><em>{*quote}</em></p>
                    },
                    DemoOutput::Gradient(idx) => html! {
                        <p><strong>{"Background changed!"}</strong> {format!(" Gradient #{}", idx + 1)}</p>
                    },
                }}
            </div>
        </div>
    }
}

fn clock_time(date: &Date) -> String {
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

fn clock_date(date: &Date) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let month = MONTHS[(date.get_month() as usize).min(11)];
    format!("{} {}", month, date.get_date())
}

fn apply_gradient(gradient: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        if let Err(err) = body.style().set_property("background", gradient) {
            log::warn!("could not apply gradient: {err:?}");
        }
    }
}
