use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlElement, window};
use yew::Callback;

/// Creates a resize listener that only fires once resizing has paused for `delay_ms`.
///
/// The returned listener must be kept alive for as long as the callback is
/// wanted; dropping it unregisters the handler. `None` outside a browser window.
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    let window = window()?;
    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping the pending timeout cancels it
        timeout_handle.borrow_mut().take();

        let cb = callback.clone();
        let handle = Timeout::new(delay_ms, move || cb());
        *timeout_handle.borrow_mut() = Some(handle);
    }))
}

/// Reports the width of `element` now and after every debounced window resize.
pub fn watch_width(element: HtmlElement, on_width: Callback<u32>, delay_ms: u32) -> Option<EventListener> {
    let report = move || {
        let width = u32::try_from(element.client_width()).unwrap_or(0);
        if width > 0 {
            on_width.emit(width);
        }
    };
    report();
    create_debounced_resize_listener(report, delay_ms)
}
