mod centroid;
mod decomposition;
mod finalization;
