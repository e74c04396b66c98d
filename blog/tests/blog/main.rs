mod api_source;
mod feed_source;
mod navigation;

use blog::{NavigationController, TimeSource, Viewport};
use jiff::tz::TimeZone;

/// Controller pinned to the mock data's reference time, in UTC.
pub fn controller(viewport: Viewport) -> NavigationController {
    NavigationController::with_clock(
        viewport,
        TimeSource::pinned(test_helpers::mock::reference_time()),
        TimeZone::UTC,
    )
}
