/// Current calendar year from the browser clock
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
