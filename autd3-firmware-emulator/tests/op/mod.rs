mod clear;
mod clock;
mod frequency;
mod gain;
mod info;
mod modulation;
mod sequence;
