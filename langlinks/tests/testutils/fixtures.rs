//! Page and link builders

use langlinks::{
    LanguageCode, LanguageLinkAnnotator, LinkDescriptor, MemoryStore, PageIdentity, PageOutput,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn page(title: &str) -> PageIdentity {
    PageIdentity::parse(title).expect("valid test title")
}

pub fn lang(code: &str) -> LanguageCode {
    LanguageCode::new(code).expect("valid test language")
}

pub fn local(code: &str, target: &str) -> LinkDescriptor {
    LinkDescriptor::local(lang(code), page(target))
}

pub fn interwiki(code: &str, target: &str) -> LinkDescriptor {
    LinkDescriptor::interwiki(lang(code), page(target)).expect("valid interwiki link")
}

/// Render `owner` with the given links and commit its data to `store`
pub fn save_page(store: &MemoryStore, owner: &str, links: &[LinkDescriptor]) {
    let mut output = PageOutput::new(page(owner));
    let mut annotator = LanguageLinkAnnotator::new(&mut output);
    for link in links {
        annotator
            .add_annotation_for_link(link)
            .expect("annotation succeeds");
    }
    store.update_data(output.committed().unwrap_or(output.semantic_data()));
}
