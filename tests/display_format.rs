use countdown_challenge::display::{format_countdown, ScoreTier};

#[test]
fn formats_positive_values_with_floor_seconds() {
    assert_eq!(format_countdown(0), "00:00");
    assert_eq!(format_countdown(9), "00:00");
    assert_eq!(format_countdown(50), "00:05");
    assert_eq!(format_countdown(1_234), "01:23");
    assert_eq!(format_countdown(5_000), "05:00");
    assert_eq!(format_countdown(59_999), "59:99");
    assert_eq!(format_countdown(60_000), "60:00");
}

#[test]
fn just_negative_values_render_the_minus_zero_seconds_field() {
    assert_eq!(format_countdown(-1), "-0:00");
    assert_eq!(format_countdown(-50), "-0:05");
    assert_eq!(format_countdown(-500), "-0:50");
    assert_eq!(format_countdown(-999), "-0:99");
}

#[test]
fn negative_seconds_round_toward_zero() {
    assert_eq!(format_countdown(-1_000), "-1:00");
    assert_eq!(format_countdown(-1_050), "-1:05");
    assert_eq!(format_countdown(-1_234), "-1:23");
    assert_eq!(format_countdown(-5_000), "-5:00");
    assert_eq!(format_countdown(-5_020), "-5:02");
}

#[test]
fn score_tier_boundaries() {
    assert_eq!(ScoreTier::for_final_ms(0), ScoreTier::Perfect);
    assert_eq!(ScoreTier::for_final_ms(1), ScoreTier::Amazing);
    assert_eq!(ScoreTier::for_final_ms(80), ScoreTier::Amazing);
    assert_eq!(ScoreTier::for_final_ms(100), ScoreTier::Amazing);
    assert_eq!(ScoreTier::for_final_ms(101), ScoreTier::Great);
    assert_eq!(ScoreTier::for_final_ms(500), ScoreTier::Great);
    assert_eq!(ScoreTier::for_final_ms(501), ScoreTier::Good);
    assert_eq!(ScoreTier::for_final_ms(1_000), ScoreTier::Good);
    assert_eq!(ScoreTier::for_final_ms(1_001), ScoreTier::TimedOut);
    assert_eq!(ScoreTier::for_final_ms(5_000), ScoreTier::TimedOut);
    assert_eq!(ScoreTier::for_final_ms(5_001), ScoreTier::KeepTrying);
    assert_eq!(ScoreTier::for_final_ms(6_000), ScoreTier::KeepTrying);
}

#[test]
fn negative_finals_bucket_with_near_perfect_lateness() {
    // Tiers are evaluated on the raw signed value, so stopping far too
    // early scores the same tier as stopping 100 ms late. Kept as observed
    // in the shipped game.
    assert_eq!(ScoreTier::for_final_ms(-50), ScoreTier::Amazing);
    assert_eq!(ScoreTier::for_final_ms(-3_000), ScoreTier::Amazing);
    assert_eq!(ScoreTier::for_final_ms(-5_020), ScoreTier::Amazing);
}

#[test]
fn tier_messages_match_the_game_copy() {
    assert_eq!(ScoreTier::Perfect.message(), "PERFECT! You hit 00:00!");
    assert_eq!(ScoreTier::Amazing.message(), "Amazing, so close!");
    assert_eq!(ScoreTier::Great.message(), "Great job!");
    assert_eq!(ScoreTier::Good.message(), "Good attempt!");
    assert_eq!(ScoreTier::TimedOut.message(), "Timed Out. Better luck next time!");
    assert_eq!(ScoreTier::KeepTrying.message(), "Keep trying!");
}
