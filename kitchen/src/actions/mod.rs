mod interact;
mod interact_alternate;
mod move_chef;
mod serve;
mod toggle_pause;
mod transfer;
