//! Auto-advancing card deck for the hero section.
//!
//! The deck runs on its own fixed interval, ping-ponging between the first
//! and last card, and pauses while the pointer is over it. It is entirely
//! decoupled from the funnel state machine.

use leptos::prelude::*;

const ADVANCE_INTERVAL_MS: u32 = 1900;

pub struct DeckCard {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const DECK_CARDS: &[DeckCard] = &[
    DeckCard {
        title: "Study Abroad",
        subtitle: "Transform your future with world-class education opportunities across top global universities.",
    },
    DeckCard {
        title: "Career Launchpad",
        subtitle: "Jumpstart your professional journey with industry-leading programs and expert mentorship.",
    },
    DeckCard {
        title: "Professional Courses",
        subtitle: "Master in-demand skills with comprehensive courses designed by industry experts.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckDirection {
    Forward,
    Backward,
}

/// Ping-pong advance: walk forward to the last card, then backward to the
/// first, and so on.
pub fn advance(index: usize, direction: DeckDirection, len: usize) -> (usize, DeckDirection) {
    if len < 2 {
        return (index, direction);
    }
    match direction {
        DeckDirection::Forward => {
            if index + 1 >= len {
                (index - 1, DeckDirection::Backward)
            } else {
                (index + 1, DeckDirection::Forward)
            }
        }
        DeckDirection::Backward => {
            if index == 0 {
                (1, DeckDirection::Forward)
            } else {
                (index - 1, DeckDirection::Backward)
            }
        }
    }
}

fn card_icon(index: usize) -> impl IntoView {
    let path = match index {
        0 => "M22 10v6M2 10l10-5 10 5-10 5zM6 12v5c3 3 9 3 12 0v-5",
        1 => "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
        _ => "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
    };
    view! {
        <svg
            width="40"
            height="40"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            class="text-orange-500"
        >
            <path d=path />
        </svg>
    }
}

/// Position indicator dots below the deck.
#[component]
fn DeckIndicators(
    active_index: RwSignal<usize>,
    direction: RwSignal<DeckDirection>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center gap-2 mt-6">
            {(0..DECK_CARDS.len())
                .map(|i| {
                    let dot_class = move || {
                        if active_index.get() == i {
                            "w-6 h-2 rounded-full bg-orange-500 transition-all duration-300"
                        } else {
                            "w-2 h-2 rounded-full bg-gray-300 hover:bg-gray-400 transition-all duration-300"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=dot_class
                            on:click=move |_| {
                                active_index.set(i);
                                direction.set(DeckDirection::Forward);
                            }
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// The hero card carousel.
#[component]
pub fn CardDeck() -> impl IntoView {
    let active_index = RwSignal::new(0usize);
    let direction = RwSignal::new(DeckDirection::Forward);
    let paused = RwSignal::new(false);

    // gloo_timers::Interval is not Send+Sync in WASM, so forget it and gate
    // each tick on the pause flag instead of tearing the interval down.
    gloo_timers::callback::Interval::new(ADVANCE_INTERVAL_MS, move || {
        if paused.get_untracked() {
            return;
        }
        let (next, next_dir) = advance(
            active_index.get_untracked(),
            direction.get_untracked(),
            DECK_CARDS.len(),
        );
        active_index.set(next);
        direction.set(next_dir);
    })
    .forget();

    view! {
        <div
            class="relative w-full max-w-sm"
            on:mouseenter=move |_| paused.set(true)
            on:mouseleave=move |_| paused.set(false)
        >
            <div class="relative h-64">
                {DECK_CARDS
                    .iter()
                    .enumerate()
                    .map(|(i, card)| {
                        let card_class = move || {
                            let base = "absolute inset-0 bg-white rounded-2xl shadow-xl p-8 flex flex-col gap-4 transition-all duration-500";
                            if active_index.get() == i {
                                format!("{base} opacity-100 scale-100 z-10")
                            } else {
                                format!("{base} opacity-0 scale-95 z-0 pointer-events-none")
                            }
                        };
                        view! {
                            <div class=card_class>
                                {card_icon(i)}
                                <h3 class="text-xl font-bold text-gray-900">{card.title}</h3>
                                <p class="text-sm leading-relaxed text-gray-600">{card.subtitle}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <DeckIndicators active_index=active_index direction=direction />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_pong_advance() {
        let len = 3;
        let mut state = (0, DeckDirection::Forward);
        let mut seen = Vec::new();
        for _ in 0..8 {
            state = advance(state.0, state.1, len);
            seen.push(state.0);
        }
        assert_eq!(seen, vec![1, 2, 1, 0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_single_card_deck_stays_put() {
        assert_eq!(
            advance(0, DeckDirection::Forward, 1),
            (0, DeckDirection::Forward)
        );
    }
}
