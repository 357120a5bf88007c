// Host-side tests for the social links reveal latch.

use fx_core::SocialReveal;

#[test]
fn fires_once_when_crossing_the_threshold() {
    let mut r = SocialReveal::default();
    assert!(!r.on_scroll(100.0));
    assert!(!r.is_revealed());
    assert!(r.on_scroll(200.0));
    assert!(r.is_revealed());
    // Latched: further scrolling in either direction changes nothing
    assert!(!r.on_scroll(300.0));
    assert!(!r.on_scroll(0.0));
    assert!(r.is_revealed());
}

#[test]
fn custom_threshold() {
    let mut r = SocialReveal::new(10.0);
    assert!(!r.on_scroll(9.9));
    assert!(r.on_scroll(10.0));
}
