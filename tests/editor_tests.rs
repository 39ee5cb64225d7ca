use linequill::buffer::Location;
use linequill::editor::{FocusEvent, FocusTarget, Mode, VimEditor};

fn keys(editor: &mut VimEditor, sequence: &str) {
    for key in sequence.chars() {
        editor.push_command_key(key);
    }
}

fn lines(editor: &VimEditor) -> Vec<String> {
    editor.document().lines().to_vec()
}

#[test]
fn test_h_and_l_are_inverses_away_from_boundaries() {
    let mut editor = VimEditor::from_text("abcdef");
    keys(&mut editor, "lll");
    let start = editor.cursor();
    keys(&mut editor, "lh");
    assert_eq!(editor.cursor(), start);
    keys(&mut editor, "hl");
    assert_eq!(editor.cursor(), start);
}

#[test]
fn test_h_at_line_start_is_a_noop() {
    let mut editor = VimEditor::from_text("abc\ndef");
    keys(&mut editor, "j");
    keys(&mut editor, "hhh");
    assert_eq!(editor.cursor(), Location::new(1, 0));
}

#[test]
fn test_l_stops_at_line_end() {
    let mut editor = VimEditor::from_text("ab\ncd");
    keys(&mut editor, "lllll");
    assert_eq!(editor.cursor(), Location::new(0, 2));
}

#[test]
fn test_dollar_then_caret_then_dollar_is_stable() {
    let mut editor = VimEditor::from_text("  hello");
    keys(&mut editor, "$");
    let end = editor.cursor();
    assert_eq!(end, Location::new(0, 6));
    keys(&mut editor, "^");
    assert_eq!(editor.cursor(), Location::new(0, 2));
    keys(&mut editor, "$");
    assert_eq!(editor.cursor(), end);
}

#[test]
fn test_zero_goes_to_absolute_line_start() {
    let mut editor = VimEditor::from_text("  hello");
    keys(&mut editor, "$0");
    assert_eq!(editor.cursor(), Location::new(0, 0));
}

#[test]
fn test_gg_dispatches_only_on_the_second_key() {
    let mut editor = VimEditor::from_text("one\ntwo\nthree");
    keys(&mut editor, "jj");
    assert_eq!(editor.cursor(), Location::new(2, 0));

    editor.push_command_key('g');
    assert_eq!(editor.pending_keys(), "g");
    assert_eq!(editor.cursor(), Location::new(2, 0));

    editor.push_command_key('g');
    assert_eq!(editor.pending_keys(), "");
    assert_eq!(editor.cursor(), Location::new(0, 0));
}

#[test]
fn test_gx_dispatches_nothing_and_deletes_nothing() {
    let mut editor = VimEditor::from_text("hello");
    keys(&mut editor, "gx");
    assert_eq!(lines(&editor), vec!["hello"]);
    assert_eq!(editor.cursor(), Location::new(0, 0));
    assert_eq!(editor.pending_keys(), "");
}

#[test]
fn test_g_and_gg_preserve_column_where_possible() {
    let mut editor = VimEditor::from_text("abcdef\nxy\nuvwxyz");
    keys(&mut editor, "lll");
    keys(&mut editor, "G");
    assert_eq!(editor.cursor(), Location::new(2, 3));
    keys(&mut editor, "gg");
    assert_eq!(editor.cursor(), Location::new(0, 3));
}

#[test]
fn test_vertical_motion_remembers_intentional_column() {
    let mut editor = VimEditor::from_text("abc\nde");
    keys(&mut editor, "lll");
    assert_eq!(editor.cursor(), Location::new(0, 3));

    keys(&mut editor, "j");
    assert_eq!(editor.cursor(), Location::new(1, 2));

    // The remembered column survives the clamped hop
    keys(&mut editor, "k");
    assert_eq!(editor.cursor(), Location::new(0, 3));
}

#[test]
fn test_horizontal_motion_resets_intentional_column() {
    let mut editor = VimEditor::from_text("abcdef\nab\ncdefgh");
    keys(&mut editor, "lllll");
    keys(&mut editor, "jh");
    assert_eq!(editor.cursor(), Location::new(1, 1));

    // After "h" the intent is column 1, not the old column 5
    keys(&mut editor, "j");
    assert_eq!(editor.cursor(), Location::new(2, 1));
}

#[test]
fn test_j_at_last_line_and_k_at_first_line_are_noops() {
    let mut editor = VimEditor::from_text("abc\ndef");
    keys(&mut editor, "kk");
    assert_eq!(editor.cursor(), Location::new(0, 0));
    keys(&mut editor, "jjj");
    assert_eq!(editor.cursor(), Location::new(1, 0));
}

#[test]
fn test_i_enters_insert_without_moving() {
    let mut editor = VimEditor::from_text("abc");
    keys(&mut editor, "li");
    assert_eq!(editor.mode(), Mode::Insert);
    assert_eq!(editor.focus(), FocusTarget::TextArea);
    assert_eq!(editor.cursor(), Location::new(0, 1));
}

#[test]
fn test_a_moves_right_before_entering_insert() {
    let mut editor = VimEditor::from_text("ab");
    keys(&mut editor, "a");
    assert_eq!(editor.mode(), Mode::Insert);
    assert_eq!(editor.cursor(), Location::new(0, 1));
}

#[test]
fn test_capital_a_appends_past_the_last_character() {
    let mut editor = VimEditor::from_text("ab");
    keys(&mut editor, "A");
    assert_eq!(editor.mode(), Mode::Insert);
    assert_eq!(editor.cursor(), Location::new(0, 2));
}

#[test]
fn test_capital_i_inserts_at_first_non_whitespace() {
    let mut editor = VimEditor::from_text("  hi");
    keys(&mut editor, "$I");
    assert_eq!(editor.mode(), Mode::Insert);
    assert_eq!(editor.cursor(), Location::new(0, 2));
}

#[test]
fn test_o_opens_a_line_below_and_enters_insert() {
    let mut editor = VimEditor::from_text("one\ntwo");
    keys(&mut editor, "l");
    keys(&mut editor, "o");
    assert_eq!(lines(&editor), vec!["one", "", "two"]);
    assert_eq!(editor.cursor(), Location::new(1, 0));
    assert_eq!(editor.mode(), Mode::Insert);
}

#[test]
fn test_capital_o_opens_a_line_above_and_enters_insert() {
    let mut editor = VimEditor::from_text("one\ntwo");
    keys(&mut editor, "jl");
    keys(&mut editor, "O");
    assert_eq!(lines(&editor), vec!["one", "", "two"]);
    assert_eq!(editor.cursor(), Location::new(1, 0));
    assert_eq!(editor.mode(), Mode::Insert);
}

#[test]
fn test_x_three_times_shrinks_the_line_from_the_cursor() {
    let mut editor = VimEditor::from_text("hello");

    keys(&mut editor, "x");
    assert_eq!(lines(&editor), vec!["ello"]);
    assert_eq!(editor.cursor(), Location::new(0, 0));

    keys(&mut editor, "x");
    assert_eq!(lines(&editor), vec!["llo"]);
    assert_eq!(editor.cursor(), Location::new(0, 0));

    keys(&mut editor, "x");
    assert_eq!(lines(&editor), vec!["lo"]);
    assert_eq!(editor.cursor(), Location::new(0, 0));
}

#[test]
fn test_x_pulls_the_cursor_back_when_deleting_the_last_character() {
    let mut editor = VimEditor::from_text("abc");
    keys(&mut editor, "ll");
    keys(&mut editor, "x");
    assert_eq!(lines(&editor), vec!["ab"]);
    assert_eq!(editor.cursor(), Location::new(0, 1));
}

#[test]
fn test_x_on_an_empty_line_is_a_noop() {
    let mut editor = VimEditor::from_text("\nabc");
    keys(&mut editor, "x");
    assert_eq!(lines(&editor), vec!["", "abc"]);
    assert_eq!(editor.cursor(), Location::new(0, 0));
}

#[test]
fn test_capital_x_deletes_left_but_not_across_line_start() {
    let mut editor = VimEditor::from_text("abc");
    keys(&mut editor, "X");
    assert_eq!(lines(&editor), vec!["abc"]);

    keys(&mut editor, "ll");
    keys(&mut editor, "X");
    assert_eq!(lines(&editor), vec!["ac"]);
    assert_eq!(editor.cursor(), Location::new(0, 1));
}

#[test]
fn test_capital_d_truncates_to_line_end() {
    let mut editor = VimEditor::from_text("hello world");
    keys(&mut editor, "lllll");
    keys(&mut editor, "D");
    assert_eq!(lines(&editor), vec!["hello"]);
    assert_eq!(editor.cursor(), Location::new(0, 4));
    assert_eq!(editor.mode(), Mode::Normal);
}

#[test]
fn test_capital_c_truncates_and_enters_insert() {
    let mut editor = VimEditor::from_text("hello");
    keys(&mut editor, "ll");
    keys(&mut editor, "C");
    assert_eq!(lines(&editor), vec!["he"]);
    assert_eq!(editor.cursor(), Location::new(0, 2));
    assert_eq!(editor.mode(), Mode::Insert);
}

#[test]
fn test_blur_of_the_text_area_returns_to_normal_with_left_step() {
    let mut editor = VimEditor::from_text("abc");
    keys(&mut editor, "lli");
    assert_eq!(editor.mode(), Mode::Insert);
    assert_eq!(editor.cursor(), Location::new(0, 2));

    // Blur observed from the outside, not through the escape path
    editor.handle_focus_event(FocusEvent::Blurred(FocusTarget::TextArea));
    assert_eq!(editor.mode(), Mode::Normal);
    assert_eq!(editor.focus(), FocusTarget::CommandRegister);
    assert_eq!(editor.cursor(), Location::new(0, 1));
}

#[test]
fn test_escape_path_blurs_and_steps_left() {
    let mut editor = VimEditor::from_text("abc");
    keys(&mut editor, "A");
    assert_eq!(editor.cursor(), Location::new(0, 3));

    editor.focus_command_register();
    assert_eq!(editor.mode(), Mode::Normal);
    assert_eq!(editor.cursor(), Location::new(0, 2));
}

#[test]
fn test_typed_text_lands_at_the_cursor_in_insert_mode() {
    let mut editor = VimEditor::from_text("ac");
    keys(&mut editor, "a");
    editor.insert_at_cursor("b");
    assert_eq!(lines(&editor), vec!["abc"]);
    assert_eq!(editor.cursor(), Location::new(0, 2));

    editor.focus_command_register();
    assert_eq!(editor.mode(), Mode::Normal);
    assert_eq!(editor.cursor(), Location::new(0, 1));
}

#[test]
fn test_insert_of_a_newline_splits_the_line() {
    let mut editor = VimEditor::from_text("ab");
    keys(&mut editor, "a");
    editor.insert_at_cursor("\n");
    assert_eq!(lines(&editor), vec!["a", "b"]);
    assert_eq!(editor.cursor(), Location::new(1, 0));
}

#[test]
fn test_command_keys_are_ignored_while_text_area_has_focus() {
    let mut editor = VimEditor::from_text("abc\ndef");
    keys(&mut editor, "i");
    keys(&mut editor, "jjx");
    assert_eq!(lines(&editor), vec!["abc", "def"]);
    assert_eq!(editor.cursor(), Location::new(0, 0));
    assert_eq!(editor.pending_keys(), "");
}

#[test]
fn test_open_below_on_the_last_line() {
    let mut editor = VimEditor::from_text("only");
    keys(&mut editor, "o");
    assert_eq!(lines(&editor), vec!["only", ""]);
    assert_eq!(editor.cursor(), Location::new(1, 0));
}

#[test]
fn test_wide_characters_align_by_display_width() {
    // "日本" occupies four display cells, so column 1 below it lands after
    // two narrow characters
    let mut editor = VimEditor::from_text("日本\nabcd");
    keys(&mut editor, "l");
    assert_eq!(editor.cursor(), Location::new(0, 1));
    keys(&mut editor, "j");
    assert_eq!(editor.cursor(), Location::new(1, 2));
    keys(&mut editor, "k");
    assert_eq!(editor.cursor(), Location::new(0, 1));
}
