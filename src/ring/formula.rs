/// Survivor id for a Josephus ring, without simulating it
///
/// Uses the recurrence `J(1) = 0, J(n) = (J(n - 1) + step) mod n`, which gives
/// the survivor's zero-based distance from the participant where counting
/// starts, then rotates by `start_offset`. Accepts the same arguments as
/// `JosephusRing::eliminate` and returns `None` where that would fail.
pub fn josephus_survivor(count: usize, start_offset: usize, step: usize) -> Option<usize> {
    if count == 0 || !(1..=count).contains(&start_offset) || !(1..=count).contains(&step) {
        return None;
    }

    let distance = (2..=count).fold(0, |survivor, n| (survivor + step) % n);
    Some((start_offset - 1 + distance) % count + 1)
}
