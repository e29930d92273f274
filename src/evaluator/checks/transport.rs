use std::time::Duration;

use super::CheckOutcome;

pub fn check_https(url: &str) -> CheckOutcome {
    if url.starts_with("https://") {
        CheckOutcome::pass(100, "HTTPS enabled", "Secure site with SSL")
    } else {
        CheckOutcome::fail(0, "HTTPS not enabled", "The site does not use a secure protocol")
    }
}

pub fn check_speed(load_time: Duration) -> CheckOutcome {
    let secs = load_time.as_secs_f64();
    if secs <= 2.0 {
        CheckOutcome::pass(
            100,
            format!("Excellent speed ({:.2}s)", secs),
            "Optimal load time",
        )
    } else if secs <= 4.0 {
        CheckOutcome::pass(80, format!("Good speed ({:.2}s)", secs), "Acceptable load time")
    } else {
        CheckOutcome::fail(
            40,
            format!("Slow speed ({:.2}s)", secs),
            "The site loads slowly, optimization recommended",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_by_scheme_prefix() {
        assert!(check_https("https://example.com").passed);
        let plain = check_https("http://example.com");
        assert!(!plain.passed);
        assert_eq!(plain.score, 0);
    }

    #[test]
    fn speed_bands() {
        let fast = check_speed(Duration::from_millis(2000));
        assert!(fast.passed);
        assert_eq!(fast.score, 100);
        assert_eq!(fast.message, "Excellent speed (2.00s)");

        let ok = check_speed(Duration::from_millis(3500));
        assert!(ok.passed);
        assert_eq!(ok.score, 80);

        let edge = check_speed(Duration::from_millis(4000));
        assert!(edge.passed);
        assert_eq!(edge.score, 80);

        let just_over = check_speed(Duration::from_millis(2001));
        assert_eq!(just_over.score, 80);

        let slow = check_speed(Duration::from_millis(4001));
        assert!(!slow.passed);
        assert_eq!(slow.score, 40);
    }
}
