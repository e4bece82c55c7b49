mod documentation;
mod equality;
mod list;
mod locked;
mod set;
