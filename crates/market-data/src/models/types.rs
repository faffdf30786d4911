/// Provider identifier - static constants such as "YAHOO"
pub type ProviderId = &'static str;
