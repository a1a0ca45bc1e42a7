use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::HttpActivityApi;
use crate::board::ActivityBoard;
use crate::config::BoardConfig;
use crate::model::Participant;
use crate::state::{
    ActivityCard, BoardAction, BoardState, ListView, LOADING_TEXT, LOAD_FAILED_TEXT,
    NO_PARTICIPANTS_TEXT, SELECT_PLACEHOLDER,
};
use crate::status::TimeoutScheduler;

type Board = ActivityBoard<HttpActivityApi, TimeoutScheduler>;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: BoardConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let supports_removal = props.config.supports_removal;
    let state = use_reducer(move || BoardState::new(supports_removal));
    let dispatcher = state.dispatcher();

    // One controller for the lifetime of the page, so its pending message
    // timer survives re-renders.
    let board: Rc<Board> = {
        let dispatcher = dispatcher.clone();
        let config = props.config.clone();
        use_memo((), move |_| {
            let sink = Callback::from(move |action: BoardAction| dispatcher.dispatch(action));
            let api = HttpActivityApi::new(config.api_base.clone(), config.bypass_cache);
            ActivityBoard::new(api, TimeoutScheduler, &config, sink)
        })
    };

    {
        let board = board.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { board.load_and_render().await });
            || ()
        });
    }

    let on_email = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(BoardAction::EditEmail(input.value()));
        })
    };

    let on_activity = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            dispatcher.dispatch(BoardAction::SelectActivity(sel.value()));
        })
    };

    let on_submit = {
        let board = board.clone();
        let draft = state.draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let board = board.clone();
            let draft = draft.clone();
            spawn_local(async move {
                board.submit_signup(&draft.email, &draft.activity).await;
            });
        })
    };

    let on_remove = {
        let board = board.clone();
        Callback::from(move |(activity, email): (String, String)| {
            let board = board.clone();
            spawn_local(async move {
                board
                    .submit_unregister(&activity, &email, gloo::dialogs::confirm)
                    .await;
            });
        })
    };

    let (message_class, message_text) = match &state.message {
        Some(m) => (m.kind.css_class(), m.text.clone()),
        None => ("hidden", String::new()),
    };

    html! {
        <>
          <header>
            <h1>{ "Mergington High School" }</h1>
            <h2>{ "Extracurricular Activities" }</h2>
          </header>

          <main>
            <section id="activities-container">
              <h3>{ "Available Activities" }</h3>
              <div id="activities-list">
                <ActivityListView list={state.list.clone()} on_remove={on_remove} />
              </div>
            </section>

            <section id="signup-container">
              <h3>{ "Sign Up for an Activity" }</h3>
              <form id="signup-form" onsubmit={on_submit}>
                <div class="form-group">
                  <label for="email">{ "Student Email:" }</label>
                  <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={state.draft.email.clone()}
                    oninput={on_email}
                  />
                </div>
                <div class="form-group">
                  <label for="activity">{ "Select Activity:" }</label>
                  <select id="activity" required=true onchange={on_activity}>
                    <option value="" disabled=true selected={state.draft.activity.is_empty()}>
                      { SELECT_PLACEHOLDER }
                    </option>
                    { for state.options.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == state.draft.activity}>
                          { name.clone() }
                        </option>
                    })}
                  </select>
                </div>
                <button type="submit">{ "Sign Up" }</button>
              </form>
              <div id="message" class={message_class}>{ message_text }</div>
            </section>
          </main>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ListProps {
    pub list: ListView,
    /// Emits `(activity, email)`.
    pub on_remove: Callback<(String, String)>,
}

#[function_component(ActivityListView)]
pub fn activity_list_view(props: &ListProps) -> Html {
    match &props.list {
        ListView::Loading => html! { <p>{ LOADING_TEXT }</p> },
        ListView::Failed => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        ListView::Ready(cards) => html! {
            <>
              { for cards.iter().map(|c| html! {
                  <ActivityCardView key={c.name.clone()} card={c.clone()} on_remove={props.on_remove.clone()} />
              })}
            </>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub card: ActivityCard,
    pub on_remove: Callback<(String, String)>,
}

#[function_component(ActivityCardView)]
pub fn activity_card_view(props: &CardProps) -> Html {
    let card = &props.card;

    let roster = if card.participants.is_empty() {
        html! { <p class="info">{ NO_PARTICIPANTS_TEXT }</p> }
    } else {
        html! {
            <ul class="participants">
              { for card.participants.iter().map(|p| participant_row(card, p, &props.on_remove)) }
            </ul>
        }
    };

    html! {
        <div class="activity-card">
          <h4>{ card.name.clone() }</h4>
          <p>{ card.description.clone() }</p>
          <p><strong>{ "Schedule:" }</strong>{ " " }{ card.schedule.clone() }</p>
          <p><strong>{ "Availability:" }</strong>{ " " }{ card.availability_text() }</p>
          <div class="participants-section">
            <h5 class="participants-title">
              { "Participants" }
              if let Some(count) = card.participant_count() {
                <>{ " " }<span class="count">{ count }</span></>
              }
            </h5>
            { roster }
          </div>
        </div>
    }
}

fn participant_row(card: &ActivityCard, p: &Participant, on_remove: &Callback<(String, String)>) -> Html {
    let onclick = {
        let activity = card.name.clone();
        let email = p.email.clone();
        on_remove.reform(move |_: MouseEvent| (activity.clone(), email.clone()))
    };

    html! {
        <li class="participant-item">
          <span class="avatar">{ p.initials.clone() }</span>
          <span class="participant-text">{ p.display_name.clone() }</span>
          <span class="participant-email">{ p.email.clone() }</span>
          if card.removable {
            <button
              type="button"
              class="delete-participant"
              title="Remove participant"
              data-activity={card.name.clone()}
              data-email={p.email.clone()}
              {onclick}
            >
              { "✖" }
            </button>
          }
        </li>
    }
}
