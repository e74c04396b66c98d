mod content;
mod waitlist;
