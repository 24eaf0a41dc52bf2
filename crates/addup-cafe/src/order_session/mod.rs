//! # Order Session
//!
//! In-memory state for one student's ordering attempt against one menu. The session
//! is a small phase machine:
//!
//! ```text
//! greeting ──dismiss──▶ menu ──place──▶ placed ──check (correct)──▶ result
//!                        ▲               │  ▲                          │
//!                        │               │  └─check (wrong / invalid)  │
//!                        │               └────────quit & reveal───────▶│
//!                        └──────edit order (from placed or result)─────┤
//!                        └──────place another order (from result)──────┘
//! ```
//!
//! An order maps item ids to positive quantities; a quantity that drops to zero
//! removes the line. Totals are exact cent sums.
//!
//! The session knows nothing about classrooms. Binding it to an assignment, and
//! recording answers, is the job of [`crate::play::PlaySession`].

pub mod answer;
pub mod calculator;
pub mod error;

pub use answer::{parse_answer, Answer};
pub use calculator::{Calculator, Operator};
pub use error::OrderError;

use crate::menu::{MenuItem, Money, RestaurantMenu};
use std::collections::HashMap;
use std::fmt;

pub const INVALID_ANSWER_MESSAGE: &str = "Please enter a valid number (e.g. 35.50)";
pub const CORRECT_MESSAGE: &str = "✅ Correct! Great job!";
pub const RETRY_MESSAGE: &str = "❌ Not correct. Try again or press Quit to see the answer.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Greeting,
    Menu,
    Placed,
    Result,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Greeting => "greeting",
            Phase::Menu => "menu",
            Phase::Placed => "placed",
            Phase::Result => "result",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub tone: Tone,
    pub message: String,
}

impl Feedback {
    fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub item: &'static MenuItem,
    pub quantity: u32,
    pub subtotal: Money,
}

#[derive(Debug, Clone)]
pub struct OrderSession {
    menu: &'static RestaurantMenu,
    phase: Phase,
    order: HashMap<&'static str, u32>,
    visible: usize,
    answer: String,
    feedback: Option<Feedback>,
    revealed: Option<Money>,
    calculator: Calculator,
}

impl OrderSession {
    pub fn new(menu: &'static RestaurantMenu) -> Self {
        Self {
            menu,
            phase: Phase::Greeting,
            order: HashMap::new(),
            visible: 0,
            answer: String::new(),
            feedback: None,
            revealed: None,
            calculator: Calculator::new(),
        }
    }

    pub fn menu(&self) -> &'static RestaurantMenu {
        self.menu
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The exact total, once the student has given up.
    pub fn revealed_total(&self) -> Option<Money> {
        self.revealed
    }

    // --- greeting ---

    /// Leaves the greeting. With `reveal_all` every item is visible at once,
    /// otherwise only the first and the caller ticks [`reveal_next`](Self::reveal_next).
    pub fn dismiss_greeting(&mut self, reveal_all: bool) -> Result<(), OrderError> {
        self.expect(&[Phase::Greeting], "dismiss the greeting")?;
        self.visible = if reveal_all {
            self.menu.items.len()
        } else {
            self.menu.items.len().min(1)
        };
        self.phase = Phase::Menu;
        Ok(())
    }

    // --- menu ---

    /// One staggered-reveal tick. Returns `false` once everything is visible.
    pub fn reveal_next(&mut self) -> bool {
        if self.phase != Phase::Menu || self.visible >= self.menu.items.len() {
            return false;
        }
        self.visible += 1;
        true
    }

    pub fn visible_items(&self) -> &'static [MenuItem] {
        &self.menu.items[..self.visible]
    }

    /// Only items the reveal has already shown can be ordered.
    pub fn add_item(&mut self, item_id: &str) -> Result<u32, OrderError> {
        self.expect(&[Phase::Menu], "change the order")?;
        let item = self.lookup(item_id)?;
        if !self.visible_items().iter().any(|shown| shown.id == item.id) {
            return Err(OrderError::NotShown(item_id.to_string()));
        }
        let quantity = self.order.entry(item.id).or_insert(0);
        *quantity += 1;
        Ok(*quantity)
    }

    /// Decrements a line; a line reaching zero disappears. Absent lines are left alone.
    pub fn remove_item(&mut self, item_id: &str) -> Result<u32, OrderError> {
        self.expect(&[Phase::Menu], "change the order")?;
        let item = self.lookup(item_id)?;
        let Some(quantity) = self.order.get_mut(item.id) else {
            return Ok(0);
        };
        *quantity -= 1;
        let left = *quantity;
        if left == 0 {
            self.order.remove(item.id);
        }
        Ok(left)
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.order.get(item_id).copied().unwrap_or(0)
    }

    pub fn item_count(&self) -> u32 {
        self.order.values().sum()
    }

    /// Order lines in menu order.
    pub fn lines(&self) -> Vec<OrderLine> {
        self.menu
            .items
            .iter()
            .filter_map(|item| {
                self.order.get(item.id).map(|&quantity| OrderLine {
                    item,
                    quantity,
                    subtotal: item.price.times(quantity),
                })
            })
            .collect()
    }

    pub fn total(&self) -> Money {
        self.lines().iter().map(|line| line.subtotal).sum()
    }

    pub fn place_order(&mut self) -> Result<(), OrderError> {
        self.expect(&[Phase::Menu], "place the order")?;
        if self.item_count() == 0 {
            return Err(OrderError::EmptyOrder);
        }
        self.answer.clear();
        self.feedback = None;
        self.revealed = None;
        self.calculator.clear();
        self.phase = Phase::Placed;
        Ok(())
    }

    // --- placed ---

    pub fn set_answer(&mut self, answer: impl Into<String>) -> Result<(), OrderError> {
        self.expect(&[Phase::Placed], "enter an answer")?;
        self.answer = answer.into();
        Ok(())
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }

    /// Copies the calculator display into the answer field.
    pub fn paste_calculator(&mut self) -> Result<(), OrderError> {
        let display = self.calculator.display().to_string();
        self.set_answer(display)
    }

    /// Checks the typed answer against the total.
    ///
    /// An unparseable answer is an error and leaves the phase unchanged; a wrong
    /// number is `Ok(Verdict::Incorrect)` and also stays in `placed`.
    pub fn check_answer(&mut self) -> Result<Verdict, OrderError> {
        self.expect(&[Phase::Placed], "check an answer")?;
        let Some(answer) = parse_answer(&self.answer) else {
            self.feedback = Some(Feedback::new(Tone::Error, INVALID_ANSWER_MESSAGE));
            return Err(OrderError::InvalidAnswer(self.answer.clone()));
        };

        if answer.within_cent(self.total()) {
            self.feedback = Some(Feedback::new(Tone::Success, CORRECT_MESSAGE));
            self.phase = Phase::Result;
            Ok(Verdict::Correct)
        } else {
            self.feedback = Some(Feedback::new(Tone::Error, RETRY_MESSAGE));
            Ok(Verdict::Incorrect)
        }
    }

    pub fn quit_and_reveal(&mut self) -> Result<Money, OrderError> {
        self.expect(&[Phase::Placed], "reveal the total")?;
        let total = self.total();
        self.revealed = Some(total);
        self.feedback = Some(Feedback::new(
            Tone::Info,
            format!("🔎 The correct total is ${total}"),
        ));
        self.phase = Phase::Result;
        Ok(total)
    }

    // --- placed / result ---

    /// Back to the menu with the current order kept.
    pub fn edit_order(&mut self) -> Result<(), OrderError> {
        self.expect(&[Phase::Placed, Phase::Result], "edit the order")?;
        self.feedback = None;
        self.revealed = None;
        self.phase = Phase::Menu;
        Ok(())
    }

    /// Starts over with an empty order and the staggered reveal restarted.
    pub fn place_another_order(&mut self) -> Result<(), OrderError> {
        self.expect(&[Phase::Result], "start another order")?;
        self.order.clear();
        self.answer.clear();
        self.feedback = None;
        self.revealed = None;
        self.calculator.clear();
        self.visible = self.menu.items.len().min(1);
        self.phase = Phase::Menu;
        Ok(())
    }

    fn expect(&self, allowed: &[Phase], action: &'static str) -> Result<(), OrderError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(OrderError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn lookup(&self, item_id: &str) -> Result<&'static MenuItem, OrderError> {
        self.menu
            .item(item_id)
            .ok_or_else(|| OrderError::UnknownItem(item_id.to_string()))
    }
}
