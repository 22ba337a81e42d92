/// Handle to the host page.
///
/// The engine performs every page lookup and mutation through this trait,
/// so no ambient global document is assumed: the host passes its handle to
/// the operations that need one.
pub trait Document {
    /// Scroll-axis offset of the element identified by `id`, if present.
    fn element_offset(&self, id: &str) -> Option<u64>;

    /// Rewrites the destination of the link element identified by `id`.
    ///
    /// Unknown ids are ignored.
    fn set_link_href(&mut self, id: &str, url: &str);
}
