use super::*;

/// One-shot role assignment policy.
///
/// Evaluated against a snapshot of the seats currently held in a room:
/// the first vacancy in {white, black} wins, everyone else spectates.
/// The decision is never re-evaluated retroactively; a side falling
/// vacant later does not promote a spectator already in the room.
pub struct Seating;

impl Seating {
    /// Picks the role for a newly joined connection.
    pub fn assign<'a>(seated: impl IntoIterator<Item = &'a Role>) -> Role {
        let (white, black) = seated.into_iter().fold((false, false), |(w, b), role| {
            (w || *role == Role::White, b || *role == Role::Black)
        });
        if !white {
            Role::White
        } else if !black {
            Role::Black
        } else {
            Role::Spectator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_room_seats_white_first() {
        let nobody: [&Role; 0] = [];
        assert_eq!(Seating::assign(nobody), Role::White);
    }
    #[test]
    fn second_player_takes_black() {
        assert_eq!(Seating::assign([&Role::White]), Role::Black);
    }
    #[test]
    fn full_board_spectates() {
        assert_eq!(Seating::assign([&Role::White, &Role::Black]), Role::Spectator);
        assert_eq!(
            Seating::assign([&Role::White, &Role::Black, &Role::Spectator]),
            Role::Spectator
        );
    }
    #[test]
    fn vacant_white_is_filled_by_newcomers() {
        // only black seated, e.g. after white disconnected
        assert_eq!(Seating::assign([&Role::Black]), Role::White);
        assert_eq!(Seating::assign([&Role::Black, &Role::Spectator]), Role::White);
    }
}
