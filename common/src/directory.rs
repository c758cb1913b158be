//! ディレクトリ一覧ページの平坦化
//!
//! ページを受け取った順に連結し、`(zid, contact_id)` が同じ連絡先は先勝ちで除外する。

use crate::types::{Contact, ContactPage};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ContactCollector {
    contacts: Vec<Contact>,
    seen: HashSet<(String, String)>,
}

impl ContactCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// ページを追加し、新たに追加された件数を返す
    pub fn push_page(&mut self, page: ContactPage) -> usize {
        let before = self.contacts.len();
        for contact in page.contacts {
            if !contact.contact_id.is_empty()
                && !self
                    .seen
                    .insert((contact.account_id.clone(), contact.contact_id.clone()))
            {
                log::debug!("重複した連絡先を除外: {}", contact.display_name());
                continue;
            }
            self.contacts.push(contact);
        }
        self.contacts.len() - before
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }
}
