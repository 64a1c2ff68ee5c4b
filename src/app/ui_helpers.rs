use crate::reducer::DraftField;

pub fn wrap_prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

pub fn wrap_next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

pub fn focus_next(field: DraftField) -> DraftField {
    match field {
        DraftField::Category => DraftField::StartHour,
        DraftField::StartHour => DraftField::StartMinute,
        DraftField::StartMinute => DraftField::DurationMinutes,
        DraftField::DurationMinutes => DraftField::Category,
    }
}

pub fn focus_prev(field: DraftField) -> DraftField {
    match field {
        DraftField::Category => DraftField::DurationMinutes,
        DraftField::StartHour => DraftField::Category,
        DraftField::StartMinute => DraftField::StartHour,
        DraftField::DurationMinutes => DraftField::StartMinute,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_prev_index_wraps_to_end() {
        assert_eq!(wrap_prev_index(0, 5), 4);
        assert_eq!(wrap_prev_index(3, 5), 2);
        assert_eq!(wrap_prev_index(0, 0), 0);
    }

    #[test]
    fn test_wrap_next_index_wraps_to_start() {
        assert_eq!(wrap_next_index(4, 5), 0);
        assert_eq!(wrap_next_index(1, 5), 2);
        assert_eq!(wrap_next_index(0, 0), 0);
    }

    #[test]
    fn test_focus_cycle_is_closed() {
        let mut field = DraftField::Category;
        for _ in 0..4 {
            field = focus_next(field);
        }
        assert_eq!(field, DraftField::Category);

        assert_eq!(focus_prev(focus_next(DraftField::StartMinute)), DraftField::StartMinute);
    }
}
