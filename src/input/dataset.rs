// Ratings collected in the handover user study: one group of four per
// participant (appropriateness, naturalness, predictability, safety).

pub const OVERHAND: &str = "4 3 4 5 5 3 4 5 4 2 5 4 4 4 5 4 4 4 4 5 5 2 5 5 2 4 3 5 2 2 4 5 \
    4 4 5 5 5 4 5 5 4 4 3 4 4 3 5 5 4 4 5 5 5 4 5 5 4 2 4 4 4 3 5 5 \
    5 2 4 5 3 2 4 2 4 3 4 3 5 2 5 5 3 2 4 5 5 4 5 5 5 5 5 5 5 2 4 5 \
    5 2 5 5 4 4 5 5 4 4 5 5 4 3 5 5 5 4 3 5 4 3 4 5 5 4 4 5 5 4 5 5 \
    4 4 4 4 5 4 4 3 5 2 4 5 4 4 4 5";

pub const UNDERHAND: &str = "4 3 4 5 5 4 5 5 5 2 3 4 5 2 4 4 5 4 5 5 5 5 5 5 4 2 4 4 3 3 4 5 \
    4 4 4 5 5 4 4 4 5 5 5 5 5 5 4 5 5 5 5 5 5 4 4 5 5 4 4 5 4 2 4 5 \
    4 4 4 5 4 4 5 5 5 5 4 5 4 4 5 5 5 4 5 5 4 3 5 4 4 3 5 4 4 2 3 4 \
    5 3 4 5 4 2 4 5 4 1 3 4 5 3 4 5 2 4 5 5 4 2 4 4 4 3 4 5 4 4 4 3 \
    5 3 4 4 5 5 5 5 4 2 4 4 5 2 4 5 5 3 2 5 4 3 5 4 5 4 3 5 4 5 4 5 \
    4 4 4 5 5 4 4 5 5 4 5 5 4 2 4 4";

pub const SIDE: &str = "5 4 3 5 4 5 4 4 5 5 5 5 4 4 5 5 5 4 5 5 4 2 2 1 5 5 4 5 4 4 3 5 \
    5 5 5 5 4 4 3 5 5 4 5 5 4 3 4 3 5 4 5 5 4 3 5 4 5 5 5 5 4 2 4 3 \
    4 4 4 5 4 3 5 5 4 5 5 4 4 4 4 5 5 2 4 5 4 4 4 4 4 4 5 4 5 4 4 5 \
    4 3 5 5 3 4 5 5 4 3 5 4 5 3 4 5";
