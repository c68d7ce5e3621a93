mod grep;
mod ls;
mod multi_edit;
