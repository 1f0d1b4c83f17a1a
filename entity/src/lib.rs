pub mod jersey_design;

/*
 One record per saved customization. The frontend keeps a front/back design
 state and posts the whole thing at once, so every per-side field lives flat
 on the same row. Records are write-once: nothing in the app updates or
 deletes a design after it is saved.
 */
