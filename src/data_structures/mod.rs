use crate::types::input::Move;

/// Moves produced by the rule engine. A position rarely has more than 16 legal moves.
pub type MoveList = smallvec::SmallVec<[Move; 16]>;

#[macro_export]
macro_rules! move_list {
    () => {
        $crate::smallvec::SmallVec::<[$crate::types::input::Move; 16]>::new()
    };
    ($(($r: expr, $c: expr)),+ $(,)?) => {{
        let list: $crate::data_structures::MoveList =
            $crate::smallvec::smallvec![$($crate::types::input::Move::new($r, $c)),+];
        list
    }};
}
