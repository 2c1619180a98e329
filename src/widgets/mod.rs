//! Timer-driven home page widgets: stat counters and carousels.
//!
//! Every widget that animates owns a [`Ticker`]. Dropping the widget aborts its
//! timer task, so nothing keeps mutating state after the owner is gone.

pub mod carousel;
pub mod counter;
pub mod ticker;

pub use carousel::{Carousel, CarouselDriver, CarouselError, CarouselWindow, RestartPolicy};
pub use counter::{format_count, Counter, CounterAnimation, StatDisplay, StatsBoard};
pub use ticker::{TickControl, Ticker};
