/// Per-state histogram of one scoreboard string.
///
/// Each scoreboard character encodes one worker slot. The alphabet is fixed
/// by mod_status; anything outside it (newlines, stray markup) is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateTallies {
    /// `_` waiting for connection
    pub waiting: u64,
    /// `S` starting up
    pub starting: u64,
    /// `R` reading request
    pub reading: u64,
    /// `W` sending reply
    pub sending: u64,
    /// `K` keepalive read
    pub keepalive: u64,
    /// `D` DNS lookup
    pub dns: u64,
    /// `C` closing connection
    pub closing: u64,
    /// `L` logging
    pub logging: u64,
    /// `G` gracefully finishing
    pub graceful: u64,
    /// `I` idle cleanup
    pub idle_cleanup: u64,
    /// `.` slot with no worker process
    pub open_slots: u64,
}

impl StateTallies {
    /// Pure character histogram; ordering of the scoreboard is irrelevant.
    /// State letters are case-sensitive, matching mod_status output.
    pub fn from_scoreboard(scoreboard: &str) -> Self {
        let mut tallies = Self::default();
        for c in scoreboard.chars() {
            match c {
                '_' => tallies.waiting += 1,
                'S' => tallies.starting += 1,
                'R' => tallies.reading += 1,
                'W' => tallies.sending += 1,
                'K' => tallies.keepalive += 1,
                'D' => tallies.dns += 1,
                'C' => tallies.closing += 1,
                'L' => tallies.logging += 1,
                'G' => tallies.graceful += 1,
                'I' => tallies.idle_cleanup += 1,
                '.' => tallies.open_slots += 1,
                _ => {}
            }
        }
        tallies
    }

    pub fn total(&self) -> u64 {
        self.waiting
            + self.starting
            + self.reading
            + self.sending
            + self.keepalive
            + self.dns
            + self.closing
            + self.logging
            + self.graceful
            + self.idle_cleanup
            + self.open_slots
    }
}

#[cfg(test)]
mod tests {
    use super::StateTallies;

    #[test]
    fn counts_every_state() {
        let t = StateTallies::from_scoreboard("_SRWKDCLGI.");
        assert_eq!(t.waiting, 1);
        assert_eq!(t.starting, 1);
        assert_eq!(t.reading, 1);
        assert_eq!(t.sending, 1);
        assert_eq!(t.keepalive, 1);
        assert_eq!(t.dns, 1);
        assert_eq!(t.closing, 1);
        assert_eq!(t.logging, 1);
        assert_eq!(t.graceful, 1);
        assert_eq!(t.idle_cleanup, 1);
        assert_eq!(t.open_slots, 1);
        assert_eq!(t.total(), 11);
    }

    #[test]
    fn open_slots_are_dots() {
        let t = StateTallies::from_scoreboard("..WW.._SS");
        assert_eq!(t.open_slots, 4);
        assert_eq!(t.sending, 2);
        assert_eq!(t.starting, 2);
        assert_eq!(t.waiting, 1);
    }

    #[test]
    fn unmapped_characters_are_ignored() {
        let with_noise = StateTallies::from_scoreboard("W.x?W\n.z");
        let clean = StateTallies::from_scoreboard("W.W.");
        assert_eq!(with_noise, clean);
    }

    #[test]
    fn total_never_exceeds_length() {
        for s in ["", "....", "WWWW", "abcWW..", "W W W"] {
            let t = StateTallies::from_scoreboard(s);
            assert!(t.total() as usize <= s.len());
        }
    }

    #[test]
    fn state_letters_are_case_sensitive() {
        let t = StateTallies::from_scoreboard("wsrk");
        assert_eq!(t.total(), 0);
    }

    #[test]
    fn empty_scoreboard_reports_zero_open_slots() {
        let t = StateTallies::from_scoreboard("");
        assert_eq!(t, StateTallies::default());
    }
}
