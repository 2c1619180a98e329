//! Auto-advancing carousels for the hero banner and testimonials.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::ticker::{TickControl, Ticker};
use crate::config::WidgetConfig;
use crate::content::{HERO_SLIDES, TESTIMONIALS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    Empty,
    #[error("slide {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
}

/// Indices shown by the three-card layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselWindow {
    pub previous: usize,
    pub active: usize,
    pub next: usize,
}

/// Slide cursor cycling modulo the slide count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { len, index: 0 })
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(index)
    }

    pub fn window(&self) -> CarouselWindow {
        CarouselWindow {
            previous: (self.index + self.len - 1) % self.len,
            active: self.index,
            next: (self.index + 1) % self.len,
        }
    }
}

/// What a manual slide change does to the pending auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Keep the current schedule.
    Keep,
    /// Start a fresh full interval from the moment of navigation.
    RestartOnNavigate,
}

/// A [`Carousel`] with its auto-advance timer.
#[derive(Debug)]
pub struct CarouselDriver {
    carousel: Arc<Mutex<Carousel>>,
    interval: Duration,
    policy: RestartPolicy,
    ticker: Ticker,
}

impl CarouselDriver {
    pub fn start(carousel: Carousel, interval: Duration, policy: RestartPolicy) -> Self {
        let carousel = Arc::new(Mutex::new(carousel));
        let ticker = spawn_advance(&carousel, interval);
        Self {
            carousel,
            interval,
            policy,
            ticker,
        }
    }

    pub fn hero(config: &WidgetConfig) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(HERO_SLIDES.len())?;
        Ok(Self::start(carousel, config.hero_interval, RestartPolicy::Keep))
    }

    pub fn testimonials(config: &WidgetConfig) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(TESTIMONIALS.len())?;
        Ok(Self::start(
            carousel,
            config.testimonial_interval,
            RestartPolicy::RestartOnNavigate,
        ))
    }

    fn with_carousel<T>(&self, f: impl FnOnce(&mut Carousel) -> T) -> T {
        let mut carousel = self.carousel.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut carousel)
    }

    pub fn index(&self) -> usize {
        self.with_carousel(|carousel| carousel.index())
    }

    pub fn window(&self) -> CarouselWindow {
        self.with_carousel(|carousel| carousel.window())
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn next(&mut self) -> usize {
        let index = self.with_carousel(Carousel::advance);
        self.navigated();
        index
    }

    pub fn previous(&mut self) -> usize {
        let index = self.with_carousel(Carousel::previous);
        self.navigated();
        index
    }

    pub fn go_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        let index = self.with_carousel(|carousel| carousel.go_to(index))?;
        self.navigated();
        Ok(index)
    }

    fn navigated(&mut self) {
        if self.policy == RestartPolicy::RestartOnNavigate {
            // Replacing the ticker drops, and so aborts, the old schedule.
            self.ticker = spawn_advance(&self.carousel, self.interval);
        }
    }
}

fn spawn_advance(carousel: &Arc<Mutex<Carousel>>, interval: Duration) -> Ticker {
    let carousel = carousel.clone();
    Ticker::spawn(interval, move || {
        let index = carousel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .advance();
        debug!(index, "carousel advanced");
        TickControl::Continue
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    async fn settle(duration: Duration) {
        time::sleep(duration).await;
        tokio::task::yield_now().await;
    }

    #[test]
    fn empty_carousels_are_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn cycles_back_after_len_advances() {
        let mut carousel = Carousel::new(5).expect("slides");
        carousel.go_to(2).expect("in range");
        for _ in 0..5 {
            carousel.advance();
        }
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn previous_wraps_and_window_surrounds_active() {
        let mut carousel = Carousel::new(5).expect("slides");
        assert_eq!(carousel.previous(), 4);
        assert_eq!(
            carousel.window(),
            CarouselWindow {
                previous: 3,
                active: 4,
                next: 0
            }
        );
        assert_eq!(
            carousel.go_to(5),
            Err(CarouselError::OutOfRange { index: 5, len: 5 })
        );
        assert_eq!(carousel.index(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn hero_advances_every_interval() {
        let driver = CarouselDriver::hero(&WidgetConfig::default()).expect("hero slides");
        assert_eq!(driver.index(), 0);

        settle(Duration::from_millis(5001)).await;
        assert_eq!(driver.index(), 1);

        settle(Duration::from_millis(10_000)).await;
        assert_eq!(driver.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn hero_navigation_keeps_the_schedule() {
        let mut driver = CarouselDriver::hero(&WidgetConfig::default()).expect("hero slides");

        settle(Duration::from_millis(4000)).await;
        assert_eq!(driver.go_to(2), Ok(2));

        settle(Duration::from_millis(1001)).await;
        assert_eq!(driver.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn testimonial_navigation_restarts_the_interval() {
        let mut driver =
            CarouselDriver::testimonials(&WidgetConfig::default()).expect("testimonials");

        settle(Duration::from_millis(5000)).await;
        assert_eq!(driver.next(), 1);

        // Without the restart this would have fired at 6000 ms.
        settle(Duration::from_millis(1500)).await;
        assert_eq!(driver.index(), 1);

        settle(Duration::from_millis(4501)).await;
        assert_eq!(driver.index(), 2);
        assert_eq!(
            driver.window(),
            CarouselWindow {
                previous: 1,
                active: 2,
                next: 3
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_driver_stops_advancing() {
        let driver = CarouselDriver::testimonials(&WidgetConfig::default()).expect("testimonials");
        let shared = driver.carousel.clone();
        drop(driver);

        settle(Duration::from_secs(60)).await;
        assert_eq!(
            shared.lock().unwrap_or_else(PoisonError::into_inner).index(),
            0
        );
    }
}
